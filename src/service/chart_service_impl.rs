use crate::common::*;
use plotters::prelude::*;
use plotters::style::FontStyle;
use std::path::Path;

use crate::enums::{chart_kind::*, chart_theme::*, pipeline_error::*};
use crate::model::{
    chart::{chart_image::*, theme_config::*},
    configs::chart_config::*,
    traffic::view_series::*,
};
use crate::traits::service_traits::chart_service::*;

pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 700;

/* SeaGreen palette, first entry */
const SERIES_COLOR: RGBColor = RGBColor(46, 139, 87);

const FONT_FAMILY: &str = "sans-serif";
const TITLE_FONT_SIZE: u32 = 36;
const AXIS_FONT_SIZE: u32 = 18;
const TICK_LENGTH: i32 = 6;
const BAR_HALF_WIDTH: f64 = 0.35;

#[derive(Debug, Clone)]
struct LoadedTheme {
    theme_config: ThemeConfig,
    watermark: Arc<RgbaImage>,
}

#[derive(Debug, Clone)]
pub struct ChartServiceImpl {
    kind: ChartKind,
    themes: HashMap<ChartTheme, LoadedTheme>,
}

impl ChartServiceImpl {
    #[doc = r#"
        Loads the watermark of every enabled theme up front so a broken deployment
        fails before any GitHub or S3 call is made.

        # Errors
        `PipelineError::Render` when a watermark file is missing or cannot be decoded.
    "#]
    pub fn new(chart_config: &ChartConfig) -> anyhow::Result<Self> {
        let mut themes: HashMap<ChartTheme, LoadedTheme> = HashMap::new();

        for theme in chart_config.enabled_themes() {
            let theme_config: ThemeConfig = chart_config.theme_config(theme);
            let watermark: RgbaImage = load_watermark(theme_config.watermark_path())?;

            info!(
                "Loaded {} watermark {} ({}x{})",
                theme,
                theme_config.watermark_path().display(),
                watermark.width(),
                watermark.height()
            );

            themes.insert(
                theme,
                LoadedTheme {
                    theme_config,
                    watermark: Arc::new(watermark),
                },
            );
        }

        Ok(ChartServiceImpl {
            kind: *chart_config.kind(),
            themes,
        })
    }
}

pub fn load_watermark(path: &Path) -> Result<RgbaImage, PipelineError> {
    if !path.is_file() {
        return Err(PipelineError::Render(format!(
            "Watermark '{}' not found",
            path.display()
        )));
    }

    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| {
            PipelineError::Render(format!(
                "Watermark '{}' could not be decoded: {}",
                path.display(),
                e
            ))
        })
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_views_chart(
        &self,
        repository_name: &str,
        series: &ViewSeries,
        theme: ChartTheme,
    ) -> anyhow::Result<ChartImage> {
        let loaded: LoadedTheme = self.themes.get(&theme).cloned().ok_or_else(|| {
            PipelineError::Render(format!("{} theme was not loaded at startup", theme))
        })?;

        let title: String = format!("Recent Views for {}", repository_name);
        let labels: Vec<String> = series.labels();
        let counts: Vec<u64> = series.counts();
        let kind: ChartKind = self.kind;

        let handle: tokio::task::JoinHandle<Result<Vec<u8>, anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                draw_views_chart(
                    &title,
                    &labels,
                    &counts,
                    &loaded.theme_config,
                    &loaded.watermark,
                    kind,
                )
            });

        let png_bytes: Vec<u8> = handle
            .await
            .context(
                "[ChartServiceImpl->render_views_chart] blocking task join failed (panic/cancelled)",
            )?
            .with_context(|| {
                format!(
                    "[ChartServiceImpl->render_views_chart] drawing the {} chart of '{}' failed",
                    theme, repository_name
                )
            })?;

        Ok(ChartImage::new(repository_name.to_string(), theme, png_bytes))
    }
}

#[doc = r#"
    Draws the views chart into an RGB buffer and encodes it as PNG.

    Layers, back to front: background color, watermark centered and unscaled,
    title and axes, the series, then the x labels rotated 45 degrees. Plotters only
    rotates text by quarter turns, so the x labels are rasterized separately and
    composited by `blend_rotated_label`.
"#]
pub fn draw_views_chart(
    title: &str,
    labels: &[String],
    values: &[u64],
    theme_config: &ThemeConfig,
    watermark: &RgbaImage,
    kind: ChartKind,
) -> anyhow::Result<Vec<u8>> {
    if labels.len() != values.len() {
        return Err(anyhow!(
            "[draw_views_chart] X labels and Y data must have the same length: {} vs {}",
            labels.len(),
            values.len()
        ));
    }

    if values.is_empty() {
        return Err(anyhow!(
            "[draw_views_chart] Cannot generate chart with empty data"
        ));
    }

    let (width, height) = (CHART_WIDTH, CHART_HEIGHT);
    let mut buffer: Vec<u8> = vec![0; (width * height * 3) as usize];

    fill_background(&mut buffer, *theme_config.background_color());
    blend_watermark(&mut buffer, width, height, watermark);

    let text_color: RGBColor = to_rgb_color(*theme_config.text_color());
    let axis_color: RGBColor = to_rgb_color(*theme_config.axis_color());
    let y_max: i64 = calculate_y_max(values);
    let x_max: f64 = values.len() as f64 - 0.5;

    let tick_anchors: Vec<(i32, i32)> = {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();

        let mut chart = ChartBuilder::on(&root)
            .caption(
                title,
                (FONT_FAMILY, TITLE_FONT_SIZE)
                    .into_font()
                    .style(FontStyle::Bold)
                    .color(&text_color),
            )
            .margin(24)
            .x_label_area_size(90)
            .y_label_area_size(80)
            .build_cartesian_2d(-0.5f64..x_max, 0i64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(0)
            .y_labels(8)
            .axis_style(axis_color.stroke_width(2))
            .y_label_style((FONT_FAMILY, AXIS_FONT_SIZE).into_font().color(&text_color))
            .y_label_formatter(&|y: &i64| format_thousands(*y))
            .draw()?;

        match kind {
            ChartKind::Bar => {
                /* zero days draw nothing */
                chart.draw_series(
                    values
                        .iter()
                        .enumerate()
                        .filter(|(_, &v)| v > 0)
                        .map(|(i, &v)| {
                            let x: f64 = i as f64;
                            Rectangle::new(
                                [(x - BAR_HALF_WIDTH, 0), (x + BAR_HALF_WIDTH, v as i64)],
                                SERIES_COLOR.filled(),
                            )
                        }),
                )?;
            }
            ChartKind::Line => {
                chart.draw_series(LineSeries::new(
                    values.iter().enumerate().map(|(i, &v)| (i as f64, v as i64)),
                    SERIES_COLOR.stroke_width(3),
                ))?;
                chart.draw_series(
                    values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| Circle::new((i as f64, v as i64), 5, SERIES_COLOR.filled())),
                )?;
            }
        }

        /* one tick per point on the x axis */
        let anchors: Vec<(i32, i32)> = (0..values.len())
            .map(|i| chart.backend_coord(&(i as f64, 0i64)))
            .collect();

        for &(x, y) in &anchors {
            root.draw(&PathElement::new(
                vec![(x, y), (x, y + TICK_LENGTH)],
                axis_color.stroke_width(2),
            ))?;
        }

        root.present()?;
        anchors
    };

    for (label, &(x, y)) in labels.iter().zip(&tick_anchors) {
        let mask: LabelMask = rasterize_label(label, AXIS_FONT_SIZE)?;
        blend_rotated_label(
            &mut buffer,
            width,
            height,
            &mask,
            (x, y + TICK_LENGTH + 4),
            *theme_config.text_color(),
        );
    }

    encode_png(buffer, width, height)
}

fn to_rgb_color((r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

#[doc = "Exclusive upper bound of the y axis: the peak plus 10% headroom, never below 5"]
pub fn calculate_y_max(values: &[u64]) -> i64 {
    let max_val: i64 = values.iter().copied().max().unwrap_or(0) as i64;
    let padding: i64 = ((max_val as f64) * 0.1).ceil().max(1.0) as i64;

    (max_val + padding).max(5)
}

pub fn format_thousands(value: i64) -> String {
    let digits: String = value.unsigned_abs().to_string();
    let mut result: String = String::new();

    for (count, c) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if value < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}

fn fill_background(buffer: &mut [u8], (r, g, b): Rgb) {
    for px in buffer.chunks_exact_mut(3) {
        px.copy_from_slice(&[r, g, b]);
    }
}

#[doc = "Source-over blend of one pixel; `alpha` 255 replaces the pixel"]
fn blend_pixel(buffer: &mut [u8], width: u32, x: u32, y: u32, (r, g, b): Rgb, alpha: u8) {
    let offset: usize = ((y * width + x) * 3) as usize;
    let a: u32 = alpha as u32;

    for (channel, src) in buffer[offset..offset + 3].iter_mut().zip([r, g, b]) {
        *channel = ((src as u32 * a + *channel as u32 * (255 - a) + 127) / 255) as u8;
    }
}

#[doc = "Composites `watermark` at the canvas center without scaling, clipping any overflow"]
pub fn blend_watermark(buffer: &mut [u8], width: u32, height: u32, watermark: &RgbaImage) {
    let offset_x: i64 = (width as i64 - watermark.width() as i64) / 2;
    let offset_y: i64 = (height as i64 - watermark.height() as i64) / 2;

    for (wx, wy, px) in watermark.enumerate_pixels() {
        let x: i64 = offset_x + wx as i64;
        let y: i64 = offset_y + wy as i64;

        if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 || px[3] == 0 {
            continue;
        }

        blend_pixel(buffer, width, x as u32, y as u32, (px[0], px[1], px[2]), px[3]);
    }
}

#[doc = "Coverage of a rendered label, one byte per pixel, 0 = background"]
#[derive(Debug, Clone)]
pub struct LabelMask {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

fn rasterize_label(text: &str, font_size: u32) -> anyhow::Result<LabelMask> {
    let font: FontDesc = (FONT_FAMILY, font_size).into_font();
    let (text_width, text_height) = font.box_size(text).map_err(|e| {
        anyhow!(
            "[rasterize_label] Failed to measure label '{}': {:?}",
            text,
            e
        )
    })?;

    let (width, height) = (text_width.max(1) + 2, text_height.max(1) + 2);
    let mut buffer: Vec<u8> = vec![0; (width * height * 3) as usize];

    {
        let area = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        area.draw_text(text, &font.color(&WHITE), (1, 1))?;
        area.present()?;
    }

    Ok(LabelMask {
        width,
        height,
        coverage: buffer.chunks_exact(3).map(|px| px[0]).collect(),
    })
}

#[doc = r#"
    Composites `mask` rotated 45 degrees counterclockwise so the text rises to the
    right and its top-right corner sits on `anchor`.

    Each destination pixel is mapped back into the mask (nearest neighbour) and
    blended with the mask's coverage as alpha.
"#]
pub fn blend_rotated_label(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    mask: &LabelMask,
    anchor: (i32, i32),
    color: Rgb,
) {
    let (sin, cos) = std::f64::consts::FRAC_PI_4.sin_cos();
    let (mask_w, mask_h) = (mask.width as f64, mask.height as f64);

    /* mask corners relative to its top-right corner, after rotation */
    let corners: Vec<(f64, f64)> = [(-mask_w, 0.0), (0.0, 0.0), (-mask_w, mask_h), (0.0, mask_h)]
        .iter()
        .map(|&(px, py)| (px * cos + py * sin, -px * sin + py * cos))
        .collect();

    let min_x: i32 = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min).floor() as i32;
    let max_x: i32 = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max).ceil() as i32;
    let min_y: i32 = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min).floor() as i32;
    let max_y: i32 = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max).ceil() as i32;

    for dy in min_y..=max_y {
        for dx in min_x..=max_x {
            let (fx, fy) = (dx as f64, dy as f64);
            let src_x: f64 = (fx * cos - fy * sin + mask_w).round();
            let src_y: f64 = (fx * sin + fy * cos).round();

            if src_x < 0.0 || src_y < 0.0 || src_x >= mask_w || src_y >= mask_h {
                continue;
            }

            let alpha: u8 = mask.coverage[src_y as usize * mask.width as usize + src_x as usize];
            if alpha == 0 {
                continue;
            }

            let (x, y) = (anchor.0 + dx, anchor.1 + dy);
            if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
                continue;
            }

            blend_pixel(buffer, width, x as u32, y as u32, color, alpha);
        }
    }
}

pub fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> anyhow::Result<Vec<u8>> {
    let image: RgbImage = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        anyhow!(
            "[encode_png] buffer does not hold {}x{} RGB pixels",
            width,
            height
        )
    })?;

    let mut png_bytes: Vec<u8> = Vec::new();
    image.write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)?;

    Ok(png_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::github::traffic_views_response::*;
    use image::Rgba;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn pixel(buffer: &[u8], width: u32, x: u32, y: u32) -> [u8; 3] {
        let offset = ((y * width + x) * 3) as usize;
        [buffer[offset], buffer[offset + 1], buffer[offset + 2]]
    }

    fn write_watermarks(dir: &Path) -> ChartConfig {
        let logo = RgbaImage::from_pixel(4, 4, Rgba([200, 30, 30, 255]));
        logo.save(dir.join("auburn-logo-color.png")).unwrap();
        logo.save(dir.join("auburn-logo-white.png")).unwrap();

        ChartConfig {
            media_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn y_axis_has_headroom_and_a_floor() {
        assert_eq!(calculate_y_max(&[]), 5);
        assert_eq!(calculate_y_max(&[0, 0, 0]), 5);
        assert_eq!(calculate_y_max(&[3, 7]), 8);
        assert_eq!(calculate_y_max(&[120, 40]), 132);
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-4500), "-4,500");
    }

    #[test]
    fn watermark_is_centered_and_respects_alpha() {
        let (width, height) = (10, 8);
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        fill_background(&mut buffer, (10, 20, 30));

        let mut watermark = RgbaImage::from_pixel(2, 2, Rgba([250, 250, 250, 255]));
        watermark.put_pixel(1, 1, Rgba([250, 250, 250, 0]));

        blend_watermark(&mut buffer, width, height, &watermark);

        assert_eq!(pixel(&buffer, width, 4, 3), [250, 250, 250]);
        assert_eq!(pixel(&buffer, width, 5, 3), [250, 250, 250]);
        assert_eq!(pixel(&buffer, width, 5, 4), [10, 20, 30]);
        assert_eq!(pixel(&buffer, width, 0, 0), [10, 20, 30]);
    }

    #[test]
    fn oversized_watermark_is_clipped_not_scaled() {
        let (width, height) = (4, 4);
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        let watermark = RgbaImage::from_pixel(6, 6, Rgba([1, 2, 3, 255]));

        blend_watermark(&mut buffer, width, height, &watermark);

        assert!(buffer.chunks_exact(3).all(|px| px == [1, 2, 3]));
    }

    #[test]
    fn rotated_label_rises_to_the_right_of_its_start() {
        let (width, height) = (60, 60);
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        let mask = LabelMask {
            width: 20,
            height: 1,
            coverage: vec![255; 20],
        };

        blend_rotated_label(&mut buffer, width, height, &mask, (40, 10), (255, 255, 255));

        /* the text ends next to the anchor and starts down and to the left of it */
        assert_eq!(pixel(&buffer, width, 39, 11), [255, 255, 255]);
        assert_eq!(pixel(&buffer, width, 28, 22), [255, 255, 255]);
        /* nothing is drawn above or to the right of the anchor */
        assert_eq!(pixel(&buffer, width, 45, 5), [0, 0, 0]);
        assert_eq!(pixel(&buffer, width, 20, 10), [0, 0, 0]);
    }

    #[test]
    fn encoded_output_is_a_png() {
        let buffer = vec![128u8; 3 * 3 * 3];
        let png_bytes = encode_png(buffer, 3, 3).unwrap();

        assert_eq!(png_bytes[..8], PNG_SIGNATURE);
        let decoded = image::load_from_memory(&png_bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 3));
    }

    #[test]
    fn encoding_rejects_a_short_buffer() {
        assert!(encode_png(vec![0u8; 5], 3, 3).is_err());
    }

    #[test]
    fn missing_watermark_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let chart_config = ChartConfig {
            media_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let err = ChartServiceImpl::new(&chart_config).unwrap_err();

        assert!(matches!(
            pipeline_error_of(&err),
            Some(PipelineError::Render(_))
        ));
        assert!(is_fatal_error(&err));
    }

    #[test]
    fn undecodable_watermark_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("auburn-logo-color.png"), b"not a png").unwrap();

        let err = load_watermark(&dir.path().join("auburn-logo-color.png")).unwrap_err();
        assert!(matches!(err, PipelineError::Render(_)));
    }

    #[test]
    fn shipped_watermarks_load_with_the_default_settings() {
        assert!(ChartServiceImpl::new(&ChartConfig::default()).is_ok());
    }

    #[test]
    fn only_enabled_themes_need_a_watermark() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]))
            .save(dir.path().join("auburn-logo-white.png"))
            .unwrap();

        let chart_config = ChartConfig {
            media_dir: dir.path().to_path_buf(),
            themes: vec![ChartTheme::Dark],
            ..Default::default()
        };

        assert!(ChartServiceImpl::new(&chart_config).is_ok());
    }

    #[tokio::test]
    async fn rendering_a_theme_that_was_not_loaded_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let chart_config = ChartConfig {
            themes: vec![ChartTheme::Light],
            ..write_watermarks(dir.path())
        };
        let chart_service = ChartServiceImpl::new(&chart_config).unwrap();
        let series = ViewSeries::normalize(&[], NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());

        let err = chart_service
            .render_views_chart("demo", &series, ChartTheme::Dark)
            .await
            .unwrap_err();

        assert!(is_fatal_error(&err));
    }

    /* plotters resolves fonts through the system font database */
    fn system_font_available() -> bool {
        let available = (FONT_FAMILY, AXIS_FONT_SIZE)
            .into_font()
            .box_size("0")
            .is_ok();
        if !available {
            eprintln!("no '{}' font installed, skipping render assertions", FONT_FAMILY);
        }
        available
    }

    fn busy_yesterday() -> ViewSeries {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let yesterday = today.pred_opt().unwrap();
        let record = DailyViewRecord::new(yesterday.and_hms_opt(0, 0, 0).unwrap().and_utc(), 1234, 80);
        ViewSeries::normalize(&[record], today)
    }

    fn series_pixels(image: &RgbImage) -> Vec<u32> {
        image
            .enumerate_pixels()
            .filter(|(_, _, px)| px.0 == [46, 139, 87])
            .map(|(x, _, _)| x)
            .collect()
    }

    async fn render_decoded(
        chart_service: &ChartServiceImpl,
        series: &ViewSeries,
        theme: ChartTheme,
    ) -> (Vec<u8>, RgbImage) {
        let chart_image = chart_service
            .render_views_chart("demo-repo", series, theme)
            .await
            .unwrap();

        assert_eq!(chart_image.bytes()[..8], PNG_SIGNATURE);
        let decoded = image::load_from_memory(chart_image.bytes()).unwrap().to_rgb8();
        (chart_image.bytes().clone(), decoded)
    }

    #[tokio::test]
    async fn each_theme_renders_full_size_over_its_background_with_a_centered_watermark() {
        if !system_font_available() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let chart_service = ChartServiceImpl::new(&write_watermarks(dir.path())).unwrap();
        let series = ViewSeries::normalize(&[], NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());

        let mut rendered: Vec<Vec<u8>> = Vec::new();

        for (theme, background) in [
            (ChartTheme::Light, [255, 255, 255]),
            (ChartTheme::Dark, [13, 17, 23]),
        ] {
            let (bytes, image) = render_decoded(&chart_service, &series, theme).await;

            assert_eq!(image.dimensions(), (CHART_WIDTH, CHART_HEIGHT));

            for (x, y) in [
                (0, 0),
                (CHART_WIDTH - 1, 0),
                (0, CHART_HEIGHT - 1),
                (CHART_WIDTH - 1, CHART_HEIGHT - 1),
            ] {
                assert_eq!(image.get_pixel(x, y).0, background, "{theme} corner ({x}, {y})");
            }

            /* the 4x4 opaque watermark covers 498..502 x 348..352 */
            assert_eq!(image.get_pixel(499, 349).0, [200, 30, 30], "{theme} center");
            assert_eq!(image.get_pixel(CHART_WIDTH / 2, CHART_HEIGHT / 2).0, [200, 30, 30]);

            rendered.push(bytes);
        }

        assert_ne!(rendered[0], rendered[1]);
    }

    #[tokio::test]
    async fn the_busiest_day_is_drawn_as_a_bar_on_the_right() {
        if !system_font_available() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let chart_service = ChartServiceImpl::new(&write_watermarks(dir.path())).unwrap();

        let (_, image) = render_decoded(&chart_service, &busy_yesterday(), ChartTheme::Dark).await;
        let bar_columns = series_pixels(&image);

        assert!(bar_columns.len() > 1000, "{} bar pixels", bar_columns.len());
        assert!(bar_columns.iter().all(|&x| x > CHART_WIDTH / 2));
    }

    #[tokio::test]
    async fn line_kind_draws_the_series_in_the_palette_color() {
        if !system_font_available() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let chart_config = ChartConfig {
            kind: ChartKind::Line,
            ..write_watermarks(dir.path())
        };
        let chart_service = ChartServiceImpl::new(&chart_config).unwrap();

        let (_, image) = render_decoded(&chart_service, &busy_yesterday(), ChartTheme::Light).await;

        assert!(!series_pixels(&image).is_empty());
    }
}
