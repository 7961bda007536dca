#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct Acknowledgement {
    pub message: String,
}
