use crate::common::*;

#[doc = "A repository as listed by `GET /users/{login}/repos`"]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(rename = "private")]
    pub is_private: bool,
}
