use leptos::{prelude::*, task::spawn_local};
use leptos_leaflet::{leaflet::Map, prelude::*};
use shared_types::LatLong;

use crate::{
    components::error::ErrorView,
    config::ClientConfig,
    locator::{
        fetch_nearby_hospitals,
        geolocation::current_position,
        places::{hospital_names, marker_icon, tile_url, MarkerKind, TILE_ATTRIBUTION},
        HospitalPlace, LocatorError,
    },
    views::map::results_list::ResultsList,
};

#[derive(Clone, Debug, PartialEq)]
pub enum MapStatus {
    Locating,
    Loading,
    Ready,
    /// Position request was refused or timed out. The layout stays, empty.
    Unavailable,
    Failed(String),
}

impl MapStatus {
    /// Only hard failures take the map and list off the page.
    pub fn hides_layout(&self) -> bool {
        matches!(self, MapStatus::Failed(_))
    }
}

type MarkerIcon = (String, (f64, f64), (f64, f64));

#[derive(Clone, Debug)]
struct MapIcons {
    tiles: String,
    user: MarkerIcon,
    hospital: MarkerIcon,
    highlight: MarkerIcon,
}

impl MapIcons {
    fn new(api_key: &str) -> Self {
        Self {
            tiles: tile_url(api_key),
            user: marker_icon(MarkerKind::User, api_key),
            hospital: marker_icon(MarkerKind::Hospital, api_key),
            highlight: marker_icon(MarkerKind::HospitalHighlight, api_key),
        }
    }
}

#[component]
pub fn HospitalMap(
    on_hospitals_found: impl Fn(Vec<String>) + 'static + Copy + Send + Sync,
    on_view_doctors: impl Fn(String) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let icons = StoredValue::new(MapIcons::new(
        config.geoapify_api_key.as_deref().unwrap_or_default(),
    ));

    let status = RwSignal::new(MapStatus::Locating);
    let user_position = RwSignal::new(None::<LatLong>);
    let places = RwSignal::new(Vec::<HospitalPlace>::new());
    let hovered = RwSignal::new(None::<usize>);
    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    let lookup_config = config.clone();
    Effect::new(move |_| {
        let config = lookup_config.clone();
        current_position(
            move |position| {
                user_position.set(Some(position));
                status.set(MapStatus::Loading);
                spawn_local(async move {
                    match fetch_nearby_hospitals(&config, position).await {
                        Ok(found) => {
                            leptos::logging::log!("Found {} nearby hospitals", found.len());
                            if !found.is_empty() {
                                on_hospitals_found(hospital_names(&found));
                            }
                            places.set(found);
                            status.set(MapStatus::Ready);
                        }
                        Err(err) => {
                            leptos::logging::error!("Hospital lookup failed: {:?}", err);
                            status.set(MapStatus::Failed(err.to_string()));
                        }
                    }
                });
            },
            move |err| match err {
                LocatorError::PositionUnavailable(reason) => {
                    leptos::logging::warn!("Position unavailable: {}", reason);
                    status.set(MapStatus::Unavailable);
                }
                other => status.set(MapStatus::Failed(other.to_string())),
            },
        );
    });

    let focus_zoom = config.focus_zoom;
    let fly_to = move |position: LatLong| {
        if let Some(map) = map.get_untracked() {
            map.set_view(&Position::new(position.lat, position.long).as_lat_lng(), focus_zoom);
        }
    };

    let initial_zoom = config.initial_zoom;
    let layout_hidden = move || status.with(MapStatus::hides_layout);

    view! {
        <section class="hospital-map-section">
            {move || match status.get() {
                MapStatus::Failed(message) => view! {
                    <div id="map-error">
                        <ErrorView title="Map unavailable" message=message />
                    </div>
                }.into_any(),
                _ => view! {}.into_any(),
            }}
            <div class="map-layout-container" class:hidden=layout_hidden>
                <div id="map" class="map-panel">
                    {move || user_position.get().map(|center| {
                        let current = icons.get_value();
                        view! {
                            <MapContainer
                                style="height: 100%; width: 100%; flex: 1"
                                center=Position::new(center.lat, center.long)
                                zoom=initial_zoom
                                set_view=true
                                map=map.write_only()
                            >
                                <TileLayer url=current.tiles.clone() attribution=TILE_ATTRIBUTION />
                                <Marker
                                    position=Position::new(center.lat, center.long)
                                    draggable=false
                                    icon_url=Some(current.user.0.clone())
                                    icon_size=Some(current.user.1)
                                    icon_anchor=Some(current.user.2)
                                >
                                    <Popup>"Your Location"</Popup>
                                </Marker>
                                {move || {
                                    let highlighted = hovered.get();
                                    places.get().into_iter().enumerate().map(|(index, place)| {
                                        let kind = if highlighted == Some(index) {
                                            MarkerKind::HospitalHighlight
                                        } else {
                                            MarkerKind::Hospital
                                        };
                                        let (icon, size, anchor) = icons.with_value(|all| {
                                            match kind {
                                                MarkerKind::HospitalHighlight => all.highlight.clone(),
                                                _ => all.hospital.clone(),
                                            }
                                        });
                                        view! {
                                            <Marker
                                                position=Position::new(place.position.lat, place.position.long)
                                                draggable=false
                                                icon_url=Some(icon)
                                                icon_size=Some(size)
                                                icon_anchor=Some(anchor)
                                                z_index_offset=Some(kind.z_index_offset())
                                            >
                                                <Popup>{place.display_name()}</Popup>
                                            </Marker>
                                        }
                                    }).collect_view()
                                }}
                            </MapContainer>
                        }
                    })}
                </div>
                <ResultsList
                    status=status
                    places=places
                    hovered=hovered
                    on_focus=fly_to
                    on_view_doctors=on_view_doctors
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_position_keeps_layout_visible() {
        assert!(!MapStatus::Unavailable.hides_layout());
        assert!(!MapStatus::Locating.hides_layout());
        assert!(!MapStatus::Ready.hides_layout());
        assert!(MapStatus::Failed("Could not fetch nearby hospitals.".to_string()).hides_layout());
    }
}
