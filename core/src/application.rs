//! # Application Use Cases
//!
//! Operations on the remote `applications` collection.

use appctl_common::error::ApiError;
use appctl_common::models::{AppType, Application, CreateApplicationRequest};
use reqwest::Method;

use crate::sender::{Exchange, RequestSender, send_json};

pub const APPLICATIONS_PATH: &str = "applications";

/// Creates an application and returns the identifier assigned by the service.
///
/// `app_type` is matched leniently: `"pure"` selects [`AppType::Pure`], every
/// other label (including unknown ones) selects the default [`AppType::E2ee`].
/// `name` is sent unchanged.
///
/// Sender failures are returned as they are. A successful exchange without a
/// usable application yields [`ApiError::EmptyResponse`].
pub async fn create_application<S>(
    name: &str,
    app_type: &str,
    sender: &S,
) -> Result<String, ApiError>
where
    S: RequestSender + ?Sized,
{
    let request = CreateApplicationRequest::new(name, AppType::from_label(app_type));
    let exchange: Exchange<Application> =
        send_json(sender, Method::POST, APPLICATIONS_PATH, &request).await?;

    match exchange.decoded {
        Some(app) if !app.is_empty() => Ok(app.id),
        _ => Err(ApiError::EmptyResponse),
    }
}
