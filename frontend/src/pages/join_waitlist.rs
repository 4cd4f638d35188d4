use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::notification::{Notice, Toast};
use crate::config;
use crate::Route;

/// Payload posted to `/api/send-email`.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistForm {
    pub name: String,
    pub company: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub company: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.company.is_none() && self.email.is_none()
    }
}

/// Loose address check: one `@`, something before it and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl WaitlistForm {
    pub fn from_inputs(name: &str, company: &str, email: &str, job_title: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            company: company.trim().to_string(),
            email: email.trim().to_string(),
            job_title: optional(job_title),
            message: optional(message),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.chars().count() < 2 {
            errors.name = Some("Name must be at least 2 characters");
        }
        if self.company.chars().count() < 2 {
            errors.company = Some("Company name must be at least 2 characters");
        }
        if !is_valid_email(&self.email) {
            errors.email = Some("Please enter a valid email address");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

async fn submit_waitlist(form: &WaitlistForm) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/send-email", config::get_backend_url()))
        .json(form)
        .map_err(|e| format!("could not encode form: {}", e))?
        .send()
        .await
        .map_err(|e| format!("request failed: {}", e))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("server answered {}", response.status()))
    }
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(JoinWaitlist)]
pub fn join_waitlist() -> Html {
    let name = use_state(String::new);
    let company = use_state(String::new);
    let email = use_state(String::new);
    let job_title = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);
    let notice = use_state(|| None::<Notice>);
    let navigator = use_navigator();

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let onsubmit = {
        let name = name.clone();
        let company = company.clone();
        let email = email.clone();
        let job_title = job_title.clone();
        let message = message.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let form = WaitlistForm::from_inputs(&name, &company, &email, &job_title, &message);
            if let Err(field_errors) = form.validate() {
                errors.set(field_errors);
                return;
            }
            errors.set(FieldErrors::default());
            submitting.set(true);

            let name = name.clone();
            let company = company.clone();
            let email = email.clone();
            let job_title = job_title.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match submit_waitlist(&form).await {
                    Ok(()) => {
                        log::info!("waitlist submission accepted");
                        for field in [&name, &company, &email, &job_title, &message] {
                            field.set(String::new());
                        }
                        submitted.set(true);
                        notice.set(Some(Notice::success(
                            "Successfully joined the waitlist!",
                            "Thanks! We'll reach out via email with your FREE guide.",
                        )));
                    }
                    Err(err) => {
                        gloo_console::error!(format!("Failed to submit waitlist form: {}", err));
                        notice.set(Some(Notice::error(
                            "Failed to join waitlist",
                            "Please try again later.",
                        )));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let add_another = {
        let submitted = submitted.clone();
        Callback::from(move |_: MouseEvent| submitted.set(false))
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let text_field = |id: &'static str,
                      label: &'static str,
                      placeholder: &'static str,
                      input_type: &'static str,
                      state: &UseStateHandle<String>,
                      error: Option<&'static str>| {
        let oninput = {
            let state = state.clone();
            Callback::from(move |e: InputEvent| state.set(input_value(e)))
        };
        html! {
            <div class="form-field">
                <label for={id}>{ label }</label>
                <input
                    id={id}
                    type={input_type}
                    value={(**state).clone()}
                    placeholder={placeholder}
                    oninput={oninput}
                    data-testid={format!("input-{}", id)}
                />
                {
                    match error {
                        Some(error) => html! { <p class="field-error">{ error }</p> },
                        None => html! {},
                    }
                }
            </div>
        }
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };

    html! {
        <div class="waitlist-page">
            {
                match &*notice {
                    Some(current) => html! { <Toast notice={current.clone()} on_dismiss={dismiss_notice} /> },
                    None => html! {},
                }
            }
            <div class="waitlist-container">
                <button class="back-button" onclick={go_home.clone()} data-testid="button-back-home">
                    {"← Back to Home"}
                </button>

                <div class="waitlist-header">
                    <h1 data-testid="waitlist-title">{"Join Our Waitlist"}</h1>
                    <p class="subtitle">{"Be the first to experience the future of outbound sales automation"}</p>
                    <div class="ebook-offer">
                        <div class="ebook-icon">{"📚"}</div>
                        <h3>{"FREE Bonus: Ultimate Outbound Sales Guide"}</h3>
                        <p>{"Get our comprehensive 40-page ebook packed with proven strategies, templates, and frameworks used by top-performing sales teams to book 10x more meetings."}</p>
                        <div class="ebook-points">
                            <span>{"✓ Email Templates"}</span>
                            <span>{"✓ Follow-up Sequences"}</span>
                            <span>{"✓ Prospecting Tips"}</span>
                        </div>
                    </div>
                </div>

                <div class="waitlist-card">
                {
                    if !*submitted {
                        html! {
                            <form onsubmit={onsubmit} class="waitlist-form" data-testid="waitlist-form" novalidate={true}>
                                <div class="form-row">
                                    { text_field("name", "Full Name *", "John Doe", "text", &name, errors.name) }
                                    { text_field("company", "Company *", "Acme Corp", "text", &company, errors.company) }
                                </div>
                                <div class="form-row">
                                    { text_field("email", "Email Address *", "john@acme.com", "email", &email, errors.email) }
                                    { text_field("job-title", "Job Title", "VP of Sales", "text", &job_title, None) }
                                </div>
                                <div class="form-field">
                                    <label for="message">{"What are your biggest outbound challenges?"}</label>
                                    <textarea
                                        id="message"
                                        rows="4"
                                        value={(*message).clone()}
                                        placeholder="Tell us about your current outbound process and challenges..."
                                        oninput={on_message}
                                        data-testid="input-message"
                                    />
                                </div>
                                <div class="perks">
                                    <h3>{"What you'll get:"}</h3>
                                    <ul>
                                        <li><strong>{"FREE Ultimate Outbound Sales Guide"}</strong>{" (40-page ebook)"}</li>
                                        <li>{"Early access to our revolutionary outbound platform"}</li>
                                        <li>{"Exclusive beta features and priority support"}</li>
                                        <li>{"Special launch pricing (up to 50% off)"}</li>
                                        <li>{"Direct line to our founding team"}</li>
                                    </ul>
                                </div>
                                <button type="submit" class="submit-button" disabled={*submitting} data-testid="button-submit">
                                    { if *submitting { "Joining Waitlist..." } else { "Join Waitlist" } }
                                </button>
                            </form>
                        }
                    } else {
                        html! {
                            <div class="form-success" data-testid="form-success">
                                <div class="success-icon">{"✔"}</div>
                                <h3>{"Welcome to the future! 🚀"}</h3>
                                <p>{"You're now on our exclusive waitlist. We'll reach out soon with early access details and special launch pricing."}</p>
                                <div class="success-ebook">
                                    <p class="strong">{"Check your email for your FREE Ultimate Outbound Sales Guide!"}</p>
                                    <p>{"The ebook download link has been sent to your inbox."}</p>
                                </div>
                                <div class="success-actions">
                                    <button class="outline-button" onclick={add_another} data-testid="button-join-another">
                                        {"Add Another Person"}
                                    </button>
                                    <button class="submit-button" onclick={go_home} data-testid="button-back-home-success">
                                        {"Back to Home"}
                                    </button>
                                </div>
                            </div>
                        }
                    }
                }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> WaitlistForm {
        WaitlistForm::from_inputs("Jane Doe", "Acme", "jane@acme.com", "", "  ")
    }

    #[test]
    fn accepts_complete_form() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn blank_optional_fields_are_absent() {
        let form = valid();
        assert_eq!(form.job_title, None);
        assert_eq!(form.message, None);
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Jane Doe", "company": "Acme", "email": "jane@acme.com"})
        );
    }

    #[test]
    fn optional_fields_use_camel_case() {
        let form = WaitlistForm::from_inputs("Jane", "Acme", "jane@acme.com", "VP of Sales", "Hi");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["jobTitle"], "VP of Sales");
        assert_eq!(json["message"], "Hi");
    }

    #[test]
    fn reports_every_failing_field() {
        let form = WaitlistForm::from_inputs(" J ", "A", "not-an-email", "", "");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.name, Some("Name must be at least 2 characters"));
        assert_eq!(errors.company, Some("Company name must be at least 2 characters"));
        assert_eq!(errors.email, Some("Please enter a valid email address"));
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.co", "first.last@sub.example.org", "x+tag@acme.io"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in ["", "@acme.com", "jane@", "jane@acme", "jane@acme.", "ja ne@acme.com", "a@b@c.com", "jane@.com"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }
}
