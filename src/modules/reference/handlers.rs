use askama::Template;
use axum::response::IntoResponse;

use super::data::{emergency_contacts, evacuation_instructions, resources, EmergencyContact};
use crate::modules::html::HtmlTemplate;

#[derive(Template)]
#[template(path = "contacts.html")]
struct ContactsTemplate {
    contacts: &'static [EmergencyContact],
}

#[derive(Template)]
#[template(path = "resources.html")]
struct ResourcesTemplate {
    resources: &'static [&'static str],
    instructions: &'static [&'static str],
}

pub async fn contacts() -> impl IntoResponse {
    HtmlTemplate(ContactsTemplate {
        contacts: emergency_contacts(),
    })
}

pub async fn resources_page() -> impl IntoResponse {
    HtmlTemplate(ResourcesTemplate {
        resources: resources(),
        instructions: evacuation_instructions(),
    })
}
