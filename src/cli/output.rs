use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandOutput<T>
where
    T: Serialize,
{
    pub status: String,
    pub result: Option<T>,
    pub errors: Option<Vec<String>>,
}

impl<T: Serialize> CommandOutput<T> {
    pub fn success(result: T) -> Self {
        Self {
            status: "success".to_string(),
            result: Some(result),
            errors: None,
        }
    }

    pub fn failure(result: Option<T>, errors: Vec<String>) -> Self {
        Self {
            status: "error".to_string(),
            result,
            errors: Some(errors),
        }
    }
}
