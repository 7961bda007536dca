#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct Error {
    pub error: String,
}
