use serde::{Deserialize, Serialize};

use storefront_core::{Checker, Validate, ValidationErrors, validators};

/// An image reference: absolute http(s) URL plus a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub name: String,
}

impl Validate for Image {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .check("url", validators::http_url(&self.url))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str) -> Image {
        Image {
            url: url.to_string(),
            name: "The Foo live".to_string(),
        }
    }

    #[test]
    fn absolute_url_is_valid() {
        assert!(image("http://example.com/baz.jpg").validate().is_ok());
    }

    #[test]
    fn relative_url_is_rejected_at_url() {
        let errors = image("baz.jpg").validate().unwrap_err();
        assert!(errors.has("url"));
    }

    #[test]
    fn list_of_images_reports_index() {
        let images = vec![image("https://example.com/a.png"), image("not a url")];
        let errors = images.validate().unwrap_err();
        assert!(errors.has("1.url"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn deserializes_from_json() {
        let parsed: Image =
            serde_json::from_str(r#"{"url":"https://example.com/x.png","name":"x"}"#).unwrap();
        assert_eq!(parsed.url, "https://example.com/x.png");
        assert_eq!(parsed.name, "x");
    }

    #[test]
    fn missing_name_is_a_parse_error() {
        assert!(serde_json::from_str::<Image>(r#"{"url":"https://example.com"}"#).is_err());
    }
}
