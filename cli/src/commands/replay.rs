use navstate_core::error::CliError;
use navstate_core::state::{NavAction, NavigationSnapshot, NavigationStore, Tab};
use serde::Serialize;

use crate::actions::parse_action;

use super::cli::ReplayArgs;

/// State after one replayed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    pub step: usize,
    pub input: String,
    pub action: NavAction,
    pub state: NavigationSnapshot,
    pub tab: Option<Tab>,
}

impl ReplayStep {
    pub fn render_text(&self) -> String {
        let route = &self.state.current_route;
        let overlay = &self.state.active_overlay;
        let tab = self
            .tab
            .map(|t| format!("{t:?}"))
            .unwrap_or_else(|| "-".to_string());

        if overlay.is_none() {
            format!(
                "{:>3}. {:<24} {} {:?} [tab: {}]",
                self.step,
                self.input,
                route.title(),
                route,
                tab
            )
        } else {
            format!(
                "{:>3}. {:<24} {} {:?} + {} {:?} [tab: {}]",
                self.step,
                self.input,
                route.title(),
                route,
                overlay.title(),
                overlay,
                tab
            )
        }
    }
}

/// Parse every token first so a typo aborts before anything is applied.
pub fn replay(store: &NavigationStore, tokens: &[String]) -> Result<Vec<ReplayStep>, CliError> {
    let actions = tokens
        .iter()
        .map(|token| parse_action(token).map(|action| (token.trim().to_string(), action)))
        .collect::<Result<Vec<_>, _>>()?;

    let steps = actions
        .into_iter()
        .enumerate()
        .map(|(idx, (input, action))| {
            store.dispatch(action.clone());
            let state = store.snapshot();
            ReplayStep {
                step: idx + 1,
                input,
                action,
                tab: state.selected_tab(),
                state,
            }
        })
        .collect();

    Ok(steps)
}

pub fn run_replay(store: &NavigationStore, args: &ReplayArgs) -> Result<i32, CliError> {
    let steps = replay(store, &args.actions)?;

    for step in &steps {
        if args.json {
            let line = serde_json::to_string(step)
                .map_err(|e| CliError::Command(format!("serialize step failed: {e}")))?;
            println!("{line}");
        } else {
            println!("{}", step.render_text());
        }
    }

    Ok(0)
}
