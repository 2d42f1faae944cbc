//! Server-rendered landing page.
//!
//! ```text
//! GET /
//! ```

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, web};
use askama::Template;
use serde::Serialize;

use crate::domain::Error;
use crate::domain::site::{ContactChannel, SiteContent};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// One entry of the car-type selector, with everything the page script needs
/// to swap prices and the booking link.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarOption {
    pub key: &'static str,
    pub label: &'static str,
    pub offer: String,
    pub list: String,
    pub discount_percent: u32,
    pub booking_link: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    site: &'a SiteContent,
    booking_link: String,
    car_options: Vec<CarOption>,
    selected: CarOption,
    channels: Vec<ContactChannel>,
    options_json: String,
}

/// Selector entries in display order, marking the package default.
pub fn car_options(site: &SiteContent) -> Vec<CarOption> {
    site.package
        .prices
        .rows()
        .into_iter()
        .map(|row| CarOption {
            key: row.car_type.key(),
            label: row.label,
            offer: row.offer,
            list: row.list,
            discount_percent: row.discount_percent,
            booking_link: site.booking_link_for(row.car_type),
            selected: row.car_type == site.package.default_car,
        })
        .collect()
}

fn script_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    // Keep `</script>` out of the inline JSON block.
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

impl<'a> HomeTemplate<'a> {
    fn new(site: &'a SiteContent) -> Result<Self, Error> {
        let car_options = car_options(site);
        let selected = car_options
            .iter()
            .find(|option| option.selected)
            .or_else(|| car_options.first())
            .cloned()
            .ok_or_else(|| Error::internal("price table has no rows"))?;
        let options_json = script_json(&car_options)
            .map_err(|err| Error::internal(format!("failed to encode price table: {err}")))?;
        Ok(Self {
            site,
            booking_link: site.booking_link(),
            car_options,
            selected,
            channels: site.channels(),
            options_json,
        })
    }
}

/// Render the HTML for the landing page.
pub fn render_home(site: &SiteContent) -> Result<String, Error> {
    HomeTemplate::new(site)?
        .render()
        .map_err(|err| Error::internal(format!("failed to render landing page: {err}")))
}

/// Landing page with the package, car selector and contact form.
#[get("/")]
pub async fn home(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let body = render_home(&state.site).map_err(|err| err.with_context("Failed to load page"))?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .body(body))
}
