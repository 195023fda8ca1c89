//! Textual action syntax for `navstate replay`.
//!
//! `name` or `name:payload`; composite routes join their parts with `+`.

use navstate_core::error::ActionParseError;
use navstate_core::state::{NavAction, OverlayKind, Route};

pub fn parse_action(token: &str) -> Result<NavAction, ActionParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ActionParseError::Empty);
    }

    let (name, payload) = match token.split_once(':') {
        Some((name, payload)) => (name, Some(payload)),
        None => (token, None),
    };

    let action: NavAction = match name {
        "home" => no_payload(name, payload, NavAction::GoHome)?,
        "profile" => no_payload(name, payload, NavAction::GoProfile)?,
        "settings" => no_payload(name, payload, NavAction::GoSettings)?,
        "search" => no_payload(name, payload, Route::Search.into())?,
        "favorites" => no_payload(name, payload, Route::Favorites.into())?,
        "profile+settings" => no_payload(name, payload, Route::ProfileWithSettings.into())?,
        "hide" => no_payload(name, payload, NavAction::HideOverlay)?,

        "detail" => Route::Detail {
            id: required(name, payload)?,
        }
        .into(),
        "favorite" => Route::FavoriteItem {
            id: required(name, payload)?,
        }
        .into(),
        "results" => Route::SearchResults {
            query: required(name, payload)?,
        }
        .into(),
        "favorite+settings" => Route::FavoriteItemWithSettings {
            id: required(name, payload)?,
        }
        .into(),
        "detail+filter" => Route::DetailWithFilter {
            id: required(name, payload)?,
        }
        .into(),

        "overlay" => parse_overlay(&required(name, payload)?)?.into(),

        other => return Err(ActionParseError::UnknownAction(other.to_string())),
    };

    Ok(action)
}

fn parse_overlay(spec: &str) -> Result<OverlayKind, ActionParseError> {
    let (name, payload) = match spec.split_once(':') {
        Some((name, payload)) => (name, Some(payload)),
        None => (spec, None),
    };

    match name {
        "none" => no_payload(name, payload, OverlayKind::None),
        "settings" => no_payload(name, payload, OverlayKind::Settings),
        "filter" => no_payload(name, payload, OverlayKind::Filter),
        "notification" => no_payload(name, payload, OverlayKind::Notification),
        "item-settings" => Ok(OverlayKind::ItemSettings {
            item_id: required(name, payload)?,
        }),
        other => Err(ActionParseError::UnknownOverlay(other.to_string())),
    }
}

fn no_payload<T>(name: &str, payload: Option<&str>, value: T) -> Result<T, ActionParseError> {
    match payload {
        None => Ok(value),
        Some(_) => Err(ActionParseError::UnexpectedPayload {
            action: name.to_string(),
        }),
    }
}

/// Payloads are opaque; only emptiness is rejected.
fn required(name: &str, payload: Option<&str>) -> Result<String, ActionParseError> {
    match payload {
        Some(p) if !p.is_empty() => Ok(p.to_string()),
        _ => Err(ActionParseError::MissingPayload {
            action: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_routes_and_sugar() {
        assert_eq!(parse_action("home").unwrap(), NavAction::GoHome);
        assert_eq!(parse_action(" settings ").unwrap(), NavAction::GoSettings);
        assert_eq!(
            parse_action("favorites").unwrap(),
            NavAction::Navigate {
                route: Route::Favorites
            }
        );
        assert_eq!(parse_action("hide").unwrap(), NavAction::HideOverlay);
    }

    #[test]
    fn test_payload_routes() {
        assert_eq!(
            parse_action("detail:7").unwrap(),
            NavAction::Navigate {
                route: Route::Detail { id: "7".into() }
            }
        );
        // only the first ':' separates the payload
        assert_eq!(
            parse_action("results:a:b").unwrap(),
            NavAction::Navigate {
                route: Route::SearchResults {
                    query: "a:b".into()
                }
            }
        );
        assert_eq!(
            parse_action("favorite+settings:5").unwrap(),
            NavAction::Navigate {
                route: Route::FavoriteItemWithSettings { id: "5".into() }
            }
        );
    }

    #[test]
    fn test_overlays() {
        assert_eq!(
            parse_action("overlay:filter").unwrap(),
            NavAction::ShowOverlay {
                kind: OverlayKind::Filter
            }
        );
        assert_eq!(
            parse_action("overlay:item-settings:3").unwrap(),
            NavAction::ShowOverlay {
                kind: OverlayKind::ItemSettings {
                    item_id: "3".into()
                }
            }
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_action(""), Err(ActionParseError::Empty));
        assert_eq!(
            parse_action("back"),
            Err(ActionParseError::UnknownAction("back".into()))
        );
        assert_eq!(
            parse_action("detail:"),
            Err(ActionParseError::MissingPayload {
                action: "detail".into()
            })
        );
        assert_eq!(
            parse_action("home:1"),
            Err(ActionParseError::UnexpectedPayload {
                action: "home".into()
            })
        );
        assert_eq!(
            parse_action("overlay:modal"),
            Err(ActionParseError::UnknownOverlay("modal".into()))
        );
    }
}
