//! Form payload for the submission endpoint.

use serde::Deserialize;

/// `application/x-www-form-urlencoded` body of `POST /submit`.
///
/// Missing fields read as empty, like any other absent form value. A field
/// sent more than once takes its first value; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct SubmitForm {
    pub secret: String,
    pub url: String,
    /// Desired slug; replaced by a random one when malformed or taken.
    pub slug: Option<String>,
}

impl From<Vec<(String, String)>> for SubmitForm {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut secret = None;
        let mut url = None;
        let mut slug = None;

        for (key, value) in pairs {
            let field = match key.as_str() {
                "secret" => &mut secret,
                "url" => &mut url,
                "slug" => &mut slug,
                _ => continue,
            };
            field.get_or_insert(value);
        }

        Self {
            secret: secret.unwrap_or_default(),
            url: url.unwrap_or_default(),
            slug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_value_wins() {
        let form = SubmitForm::from(pairs(&[
            ("url", "http://first.com"),
            ("secret", "changeme"),
            ("url", "http://second.com"),
            ("slug", "ab"),
            ("slug", "cd"),
        ]));

        assert_eq!(form.url, "http://first.com");
        assert_eq!(form.secret, "changeme");
        assert_eq!(form.slug.as_deref(), Some("ab"));
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let form = SubmitForm::from(pairs(&[("other", "x")]));

        assert!(form.secret.is_empty());
        assert!(form.url.is_empty());
        assert!(form.slug.is_none());
    }

    #[test]
    fn test_empty_slug_is_kept_as_given() {
        let form = SubmitForm::from(pairs(&[("slug", "")]));
        assert_eq!(form.slug.as_deref(), Some(""));
    }
}
