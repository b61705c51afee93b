//! Renders a sign-up form after a failed submission.
//!
//! ```bash
//! cargo run -p former --example signup_form
//! ```
//!
//! Pass `-v`/`--verbose` to see where each field value came from.

use std::collections::HashMap;

use clap::Parser;
use former::{keys, Former, FormerConfig, JsonModel, ValidationErrors};
use former_html::{select_options, Attributes};
use serde::Serialize;
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Renders a sample sign-up form to stdout.
#[derive(Parser)]
#[command(name = "signup_form", about, long_about = None)]
struct Args {
    /// Log where each field value came from.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Account {
    username: String,
    plan: String,
    newsletter: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = FormerConfig::from_json(r#"{"displayInlineErrors": true}"#)?;

    let account = Account {
        username: "ferris".to_string(),
        plan: "free".to_string(),
        newsletter: true,
    };
    let model = JsonModel::from_serialize(&account)?.with_options(
        "plan",
        select_options([("free", "Free"), ("pro", "Pro"), ("team", "Team")]),
    );

    let mut old_input = HashMap::new();
    old_input.insert("email".to_string(), "ferris@".to_string());
    old_input.insert("seats".to_string(), "0".to_string());

    let errors = ValidationErrors::new().with("email", "The email must be a valid email address.");

    let mut form = Former::new(&config)
        .with_model(model)
        .with_old_input(old_input)
        .with_errors(errors)
        .with_csrf_token("c2lnbnVw")
        .make(json!({"country": "FI"}).as_object().cloned().unwrap_or_default());
    form.set_option(keys::COMMENT_CLASS, "form-text");

    let mut html = form.open(Attributes::new().with("action", "/signup"));
    html.push_str(&form.text("username", Some("Username.req"), None, Attributes::new()));
    html.push_str(&form.text(
        "email",
        Some("Email.req"),
        None,
        Attributes::new().with("comment", "We never share your address."),
    ));
    html.push_str(&form.password("password", Some("Password.req"), Attributes::new()));
    html.push_str(&form.text("seats", Some("Extra seats"), Some(json!(1)), Attributes::new()));
    html.push_str(&form.select("plan", Some("Plan"), None, None, Attributes::new()));
    html.push_str(&form.text("country", Some("Country"), None, Attributes::new()));
    html.push_str(&form.checkbox(
        "newsletter",
        Some("Send me the newsletter"),
        "1",
        None,
        Attributes::new(),
    ));
    html.push_str(&form.submit("Sign up", Attributes::new().with("class", "btn-primary")));
    html.push_str(&form.close());

    info!(bytes = html.len(), "rendered sign-up form");
    println!("{html}");
    Ok(())
}
