use serde::Serialize;

/// Body posted to `/api/contact`
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub recaptcha_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_names() {
        let request = ContactRequest {
            name: String::from("Ann"),
            email: String::from("ann@x.com"),
            message: String::from("Hello there, this works."),
            recaptcha_token: String::new(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "Ann",
                "email": "ann@x.com",
                "message": "Hello there, this works.",
                "recaptchaToken": "",
            })
        );
    }
}
