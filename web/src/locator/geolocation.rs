use shared_types::LatLong;

use super::error::LocatorError;

/// Asks the browser for the user's position. Exactly one of the callbacks runs,
/// unless the user never answers the permission prompt.
#[cfg(feature = "hydrate")]
pub fn current_position(
    on_position: impl FnOnce(LatLong) + 'static,
    on_error: impl FnOnce(LocatorError) + 'static,
) {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::js_sys::Function;
    use web_sys::{Position, PositionError};

    let Some(window) = web_sys::window() else {
        on_error(LocatorError::GeolocationUnsupported);
        return;
    };
    let geolocation = match window.navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(_) => {
            on_error(LocatorError::GeolocationUnsupported);
            return;
        }
    };

    let success = Closure::once_into_js(move |position: Position| {
        let coords = position.coords();
        on_position(LatLong {
            lat: coords.latitude(),
            long: coords.longitude(),
        });
    });
    let failure = Closure::once_into_js(move |error: PositionError| {
        on_error(LocatorError::PositionUnavailable(error.message()));
    });

    if let Err(err) = geolocation.get_current_position_with_error_callback(
        success.unchecked_ref::<Function>(),
        Some(failure.unchecked_ref::<Function>()),
    ) {
        leptos::logging::error!("Geolocation request failed: {:?}", err);
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn current_position(
    _on_position: impl FnOnce(LatLong) + 'static,
    on_error: impl FnOnce(LocatorError) + 'static,
) {
    on_error(LocatorError::GeolocationUnsupported);
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn without_a_browser_the_error_callback_runs() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        current_position(
            |_| panic!("no position expected"),
            move |err| *sink.borrow_mut() = Some(err),
        );
        assert_eq!(*seen.borrow(), Some(LocatorError::GeolocationUnsupported));
    }
}
