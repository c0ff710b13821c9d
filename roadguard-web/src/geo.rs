//! One-shot geolocation request bridged into a future.
//!
//! The browser API is callback-based; the callbacks settle a `js_sys::Promise`
//! that the calling flow awaits. There is no cancellation: a stale request is
//! only superseded by its own resolution.

use async_trait::async_trait;
use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use roadguard_core::{Coordinates, LocationError, Locator};

use crate::dom;

const LOCATION_TIMEOUT_MS: u32 = 15_000;

/// `navigator.geolocation` behind the core [`Locator`] port.
#[derive(Clone, Copy, Default)]
pub struct GeoLocator;

#[async_trait(?Send)]
impl Locator for GeoLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        current_position().await
    }
}

/// Request the current position with a high-accuracy hint and timeout.
///
/// # Errors
/// Returns `Unsupported` when the API is missing, otherwise the mapped
/// platform error (denied, unavailable, timed out).
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn current_position() -> Result<Coordinates, LocationError> {
    let Some(win) = web_sys::window() else {
        return Err(LocationError::Unsupported);
    };
    let Ok(geolocation) = win.navigator().geolocation() else {
        return Err(LocationError::Unsupported);
    };

    let mut resolve_slot: Option<Function> = None;
    let mut reject_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, reject| {
        resolve_slot = Some(resolve);
        reject_slot = Some(reject);
    });
    let (Some(resolve), Some(reject)) = (resolve_slot, reject_slot) else {
        return Err(LocationError::Unavailable);
    };

    let on_success = Closure::once(move |position: JsValue| {
        let _ = resolve.call1(&JsValue::UNDEFINED, &position);
    });
    let on_error = Closure::once(move |error: JsValue| {
        let _ = reject.call1(&JsValue::UNDEFINED, &error);
    });

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(LOCATION_TIMEOUT_MS);

    if geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &options,
        )
        .is_err()
    {
        return Err(LocationError::Unavailable);
    }
    on_success.forget();
    on_error.forget();

    match JsFuture::from(promise).await {
        Ok(position) => read_coordinates(&position).ok_or(LocationError::Unavailable),
        Err(error) => {
            log::warn!("geolocation failed: {}", dom::js_error_message(&error));
            Err(map_position_error(&error))
        }
    }
}

fn read_coordinates(position: &JsValue) -> Option<Coordinates> {
    let position: &web_sys::Position = position.dyn_ref()?;
    let coords = position.coords();
    Some(Coordinates {
        latitude: coords.latitude(),
        longitude: coords.longitude(),
    })
}

fn map_position_error(error: &JsValue) -> LocationError {
    let Some(err) = error.dyn_ref::<web_sys::PositionError>() else {
        return LocationError::Unavailable;
    };
    match err.code() {
        web_sys::PositionError::PERMISSION_DENIED => LocationError::Denied,
        web_sys::PositionError::TIMEOUT => LocationError::TimedOut,
        _ => LocationError::Unavailable,
    }
}
