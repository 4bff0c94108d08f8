//! Built-in capabilities.
//!
//! These are the operations the stock catalog's `callback` and
//! `async_callback` shortcuts refer to by name.

use std::sync::Arc;
use std::time::Duration;

use homebase_core::{capability, digits_only};

use crate::cache::{AppDataStore, ContactBook};
use crate::error::{CapabilityError, RegistryError};
use crate::platform::Device;
use crate::registry::CapabilityRegistry;

const UBER_URL_ROOT: &str =
    "uber://?action=setPickup&pickup=my_location&dropoff%5Bformatted_address%5D=";
const EMERGENCY_TEXT: &str = "I have pressed the emergency button on my phone! Please call ASAP!";

/// Everything the built-in capabilities need.
#[derive(Clone)]
pub struct CapabilityContext {
    pub device: Device,
    pub app_data: Arc<AppDataStore>,
    pub contacts: Arc<ContactBook>,
    /// Pause after each emergency call before dialing the next contact.
    pub emergency_call_wait: Duration,
}

/// Register every built-in capability.
pub fn register_builtin_capabilities(
    registry: &CapabilityRegistry,
    ctx: CapabilityContext,
) -> Result<(), RegistryError> {
    let c = ctx.clone();
    registry.register_sync(capability::CALL_PHONE, move |params| {
        let number = params.first().ok_or(CapabilityError::MissingParam {
            capability: capability::CALL_PHONE,
            index: 0,
        })?;
        call_phone(&c, number)
    })?;

    let c = ctx.clone();
    registry.register_sync(capability::OPEN_CAMERA, move |_| open_camera(&c))?;

    register(registry, &ctx, capability::MAP_HOME, |c| async move { map_home(&c).await })?;
    register(registry, &ctx, capability::UBER_HOME, |c| async move { uber_home(&c).await })?;
    register(registry, &ctx, capability::OPEN_SPOTIFY, |c| async move { open_spotify(&c).await })?;
    register(registry, &ctx, capability::TOGGLE_TORCH, |c| async move { toggle_torch(&c).await })?;
    register(registry, &ctx, capability::EMERGENCY_CALLS, |c| async move {
        emergency_calls(&c).await
    })?;
    register(registry, &ctx, capability::PICK_AND_CALL, |c| async move { pick_and_call(&c).await })?;
    register(registry, &ctx, capability::CALL_VOICEMAIL, |c| async move {
        call_voicemail(&c).await
    })?;

    tracing::debug!("Registered {} built-in capabilities", registry.count());
    Ok(())
}

/// Register a parameterless async capability.
fn register<F, Fut>(
    registry: &CapabilityRegistry,
    ctx: &CapabilityContext,
    name: &str,
    f: F,
) -> Result<(), RegistryError>
where
    F: Fn(CapabilityContext) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<(), CapabilityError>> + Send + 'static,
{
    let ctx = ctx.clone();
    registry.register_async(name, move |_params| f(ctx.clone()))
}

// =============================================================================
// Capabilities
// =============================================================================

/// Dial `number` straight away.
pub fn call_phone(ctx: &CapabilityContext, number: &str) -> Result<(), CapabilityError> {
    ctx.device.telephony.immediate_call(&digits_only(number))?;
    Ok(())
}

pub fn open_camera(ctx: &CapabilityContext) -> Result<(), CapabilityError> {
    ctx.device.intents.open_camera()?;
    Ok(())
}

/// Driving directions home, or a plain map when no address is saved.
pub async fn map_home(ctx: &CapabilityContext) -> Result<(), CapabilityError> {
    let data = ctx.app_data.load().await;
    match data.as_ref().and_then(|d| d.home_address()) {
        Some(address) => ctx.device.intents.open_maps_with_route(address, "d")?,
        None => {
            ctx.device.alert_and_warn("Home address is not set.");
            ctx.device.intents.open_maps("")?;
        }
    }
    Ok(())
}

/// Ride-hailing deep link with home as the drop-off.
///
/// The address is percent-encoded in full, including `!'()*`.
pub async fn uber_home(ctx: &CapabilityContext) -> Result<(), CapabilityError> {
    let data = ctx.app_data.load().await;
    let url = match data.as_ref().and_then(|d| d.home_address()) {
        Some(address) => format!("{}{}", UBER_URL_ROOT, urlencoding::encode(address)),
        None => {
            ctx.device.alert_and_warn("Home address is not set.");
            "uber://".to_string()
        }
    };
    ctx.device.linking.open_url(&url).await?;
    Ok(())
}

/// Music app, searching playlists for the saved genre if there is one.
pub async fn open_spotify(ctx: &CapabilityContext) -> Result<(), CapabilityError> {
    let data = ctx.app_data.load().await;
    let url = match data.as_ref().and_then(|d| d.fav_music_genre()) {
        Some(genre) => format!("spotify://search/{}/playlists", urlencoding::encode(genre)),
        None => "spotify://".to_string(),
    };
    ctx.device.linking.open_url(&url).await?;
    Ok(())
}

/// Flip the flashlight. Does nothing if camera permission is refused.
pub async fn toggle_torch(ctx: &CapabilityContext) -> Result<(), CapabilityError> {
    let torch = &ctx.device.torch;
    if !torch.request_permission().await? {
        tracing::info!("Camera permission refused, leaving flashlight alone");
        return Ok(());
    }

    let on = !torch.status().await?;
    torch.switch_state(on).await?;
    ctx.device
        .notifier
        .alert(&format!("Flashlight is {}!", if on { "ON" } else { "OFF" }));
    Ok(())
}

/// Text and then call every emergency contact in turn.
pub async fn emergency_calls(ctx: &CapabilityContext) -> Result<(), CapabilityError> {
    let contacts = match ctx.app_data.load().await {
        Some(data) => ctx.contacts.emergency_contacts(&data).await,
        None => Vec::new(),
    };
    if contacts.is_empty() {
        ctx.device
            .alert_and_warn("No emergency contacts have been added. Call 911!");
        return Ok(());
    }

    for contact in &contacts {
        let Some(number) = contact.primary_number() else {
            tracing::warn!("Emergency contact {} has no number", contact.display_name());
            continue;
        };

        if let Err(e) = ctx
            .device
            .telephony
            .send_sms(&digits_only(number), EMERGENCY_TEXT)
            .await
        {
            tracing::warn!("Emergency text to {} failed: {}", contact.display_name(), e);
            ctx.device.notifier.alert("Failed to send emergency text msg");
        }

        call_phone(ctx, number)?;
        tracing::info!("Called: {}", number);

        if !ctx.emergency_call_wait.is_zero() {
            tokio::time::sleep(ctx.emergency_call_wait).await;
        }
    }
    Ok(())
}

/// Let the user pick a number from the system picker and call it.
pub async fn pick_and_call(ctx: &CapabilityContext) -> Result<(), CapabilityError> {
    let Some((contact, phone)) = ctx.device.contacts.select_contact_phone().await? else {
        return Ok(());
    };
    tracing::info!(
        "Selected phone number {} from {}",
        phone.number,
        contact.display_name()
    );
    call_phone(ctx, &phone.number)
}

pub async fn call_voicemail(ctx: &CapabilityContext) -> Result<(), CapabilityError> {
    let number = ctx.device.telephony.voicemail_number().await?;
    call_phone(ctx, &number)
}
