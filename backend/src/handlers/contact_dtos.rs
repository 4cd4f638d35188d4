use serde_json::{Map, Value};

/// Waitlist form as posted by the site. Every field is optional on the wire,
/// [`WaitlistSubmission::contact`] decides what is usable.
#[derive(Debug, Default, PartialEq)]
pub struct WaitlistSubmission {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct Contact<'a> {
    pub name: &'a str,
    pub company: &'a str,
    pub email: &'a str,
    pub job_title: Option<&'a str>,
    pub message: Option<&'a str>,
}

/// Strings are taken as-is and numbers in their JSON spelling. Anything else
/// (null, booleans, arrays, objects) counts as not given.
fn field(form: &Map<String, Value>, key: &str) -> Option<String> {
    match form.get(key)? {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl WaitlistSubmission {
    /// Reads a request body. A body that is not a JSON object is an empty form.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(form)) => Self::from_map(&form),
            _ => Self::default(),
        }
    }

    fn from_map(form: &Map<String, Value>) -> Self {
        Self {
            name: field(form, "name"),
            company: field(form, "company"),
            email: field(form, "email"),
            job_title: field(form, "jobTitle"),
            message: field(form, "message"),
        }
    }

    /// `None` when name, company or email is missing or blank.
    pub fn contact(&self) -> Option<Contact<'_>> {
        Some(Contact {
            name: present(&self.name)?,
            company: present(&self.company)?,
            email: present(&self.email)?,
            job_title: present(&self.job_title),
            message: present(&self.message),
        })
    }
}
