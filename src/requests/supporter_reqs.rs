use gloo_net::http::Request;
use serde::Deserialize;

pub const SUPPORTERS_URL: &str = "logo/supporters/supporters.json";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Supporter {
    pub name: String,
    pub url: String,
    pub logo: String,
}

impl Supporter {
    pub fn logo_url(&self) -> String {
        format!("logo/supporters/{}", self.logo)
    }
}

pub async fn call_get_supporters() -> Result<Vec<Supporter>, anyhow::Error> {
    let response = Request::get(SUPPORTERS_URL).send().await?;

    if response.ok() {
        let supporters: Vec<Supporter> = response.json().await?;
        Ok(supporters)
    } else {
        Err(anyhow::Error::msg(format!(
            "Could not load {}: {}",
            SUPPORTERS_URL,
            response.status()
        )))
    }
}
