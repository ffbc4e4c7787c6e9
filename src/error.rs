use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong outside the render loops.
///
/// None of these are fatal: form errors become notifications and
/// initialisation errors only disable the component that raised them.
#[derive(Error, Debug)]
pub enum SiteError {
    /// A required contact form field was empty or absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The relay answered but reported failure.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a readable response.
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected relay response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A page hook is missing or a browser call failed during setup.
    #[error("dom error: {0}")]
    Dom(String),
}

pub type SiteResult<T> = Result<T, SiteError>;

impl SiteError {
    /// Text shown to the visitor after the error prefix.
    pub fn user_message(&self) -> String {
        match self {
            SiteError::Rejected(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Browser calls fail with an opaque `JsValue`; during setup that always
/// means the page or the browser is missing something we need.
impl From<JsValue> for SiteError {
    fn from(err: JsValue) -> Self {
        let detail = err
            .as_string()
            .unwrap_or_else(|| format!("{err:?}"));
        SiteError::Dom(detail)
    }
}
