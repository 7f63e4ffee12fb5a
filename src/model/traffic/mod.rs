pub mod view_series;
