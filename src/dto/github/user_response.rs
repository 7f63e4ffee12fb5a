use crate::common::*;

#[doc = "Subset of `GET /user` needed to address the listing call"]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct AuthenticatedUser {
    pub login: String,
}
