//! Access to the current request: query parameters and URL rebuilding.

/// Reads raw query parameters of the current request.
pub trait RequestParams {
    fn query_param(&self, name: &str) -> Option<&str>;
}

/// Builds links back to the current page.
pub trait UrlBuilder {
    /// Current path with the query parameter `name` set to `value`.
    fn url_with_param(&self, name: &str, value: usize) -> String;
}

/// Everything a formatter needs from the request it renders for.
pub trait PageRequest: RequestParams + UrlBuilder {}

impl<T: RequestParams + UrlBuilder + ?Sized> PageRequest for T {}

/// Path and query pairs of the request being rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentRequest {
    path: String,
    query: Vec<(String, String)>,
}

impl CurrentRequest {
    pub fn new(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Parses a raw query string; malformed input yields no parameters.
    pub fn parse(path: impl Into<String>, query_string: &str) -> Self {
        let query = if query_string.is_empty() {
            Vec::new()
        } else {
            serde_html_form::from_str::<Vec<(String, String)>>(query_string).unwrap_or_else(
                |err| {
                    log::debug!("Ignoring malformed query string {query_string:?}: {err}");
                    Vec::new()
                },
            )
        };
        Self::new(path, query)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl RequestParams for CurrentRequest {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl UrlBuilder for CurrentRequest {
    fn url_with_param(&self, name: &str, value: usize) -> String {
        let mut query: Vec<(&str, String)> = self
            .query
            .iter()
            .filter(|(key, _)| key != name)
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();
        query.push((name, value.to_string()));

        match serde_html_form::to_string(&query) {
            Ok(encoded) => format!("{}?{}", self.path, encoded),
            Err(err) => {
                log::error!("Failed to encode query for {}: {err}", self.path);
                self.path.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_parameter() {
        let request = CurrentRequest::parse("/node/1", "page=3&lang=en");

        assert_eq!(request.query_param("page"), Some("3"));
        assert_eq!(request.query_param("lang"), Some("en"));
        assert_eq!(request.query_param("missing"), None);
    }

    #[test]
    fn overrides_existing_parameter_and_keeps_others() {
        let request = CurrentRequest::new(
            "/node/1",
            vec![
                ("lang".to_string(), "en".to_string()),
                ("page".to_string(), "3".to_string()),
            ],
        );

        assert_eq!(request.url_with_param("page", 0), "/node/1?lang=en&page=0");
    }

    #[test]
    fn appends_missing_parameter() {
        let request = CurrentRequest::new("/node/7", Vec::new());

        assert_eq!(request.url_with_param("chapter", 2), "/node/7?chapter=2");
    }

    #[test]
    fn empty_query_string_has_no_parameters() {
        let request = CurrentRequest::parse("/", "");

        assert_eq!(request.query_param("page"), None);
        assert_eq!(request.path(), "/");
    }
}
