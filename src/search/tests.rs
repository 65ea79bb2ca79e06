// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{
    search_elements, Navigation, SearchCandidate, SearchPanel, SearchRequest, SearchStatus,
};
use crate::action::{Action, SearchBarVisibility};

fn search(query: &str, tag_query: &str, regex: bool) -> Action {
    Action::Search {
        query: query.to_owned(),
        tag_query: tag_query.to_owned(),
        regex,
    }
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}

#[fixture]
fn panel() -> SearchPanel {
    let mut panel = SearchPanel::new();
    panel.show();
    panel
}

#[fixture]
fn searched(mut panel: SearchPanel) -> SearchPanel {
    panel.set_query("n");
    panel.set_results(
        ids(&["$root$Na", "$root$Nb", "$root$Nc"]),
        ids(&["alpha node", "beta node", "gamma node"]),
    );
    panel
}

#[rstest]
fn typing_dispatches_clear_then_search(mut panel: SearchPanel) {
    let actions = panel.set_query("node");
    assert_eq!(actions, vec![Action::ClearHighlights, search("node", "", false)]);
    assert!(panel.has_searched());
}

#[rstest]
fn clearing_both_inputs_resets_without_searching(mut searched: SearchPanel) {
    let actions = searched.set_query("");
    assert_eq!(actions, vec![Action::ClearHighlights]);
    assert!(searched.results().is_empty());
    assert_eq!(searched.status(), SearchStatus::Idle);
}

#[rstest]
fn tag_query_only_counts_while_the_tag_input_is_visible(mut panel: SearchPanel) {
    assert_eq!(panel.set_tag_query("#stage"), vec![Action::ClearHighlights]);

    assert!(panel.toggle_tag_input().is_empty());
    let actions = panel.set_tag_query("#stage");
    assert_eq!(actions, vec![Action::ClearHighlights, search("", "#stage", false)]);

    panel.toggle_regex();
    let actions = panel.set_query("^a");
    assert_eq!(actions[1], search("^a", "#stage", true));
}

#[rstest]
fn hiding_the_tag_input_clears_it_and_searches_again(mut panel: SearchPanel) {
    panel.toggle_tag_input();
    panel.set_tag_query("#stage");
    panel.set_query("node");

    let actions = panel.toggle_tag_input();
    assert_eq!(actions, vec![Action::ClearHighlights, search("node", "", false)]);
    assert_eq!(panel.tag_query(), "");
}

#[rstest]
fn hiding_the_tag_input_with_an_empty_query_resets(mut panel: SearchPanel) {
    panel.toggle_tag_input();
    panel.set_tag_query("#stage");

    assert_eq!(panel.toggle_tag_input(), vec![Action::ClearHighlights]);
    assert!(!panel.has_searched());
}

#[rstest]
fn missing_texts_fall_back_to_ids_and_extra_texts_are_dropped(mut panel: SearchPanel) {
    panel.set_results(ids(&["$root$Na", "$root$Nb"]), ids(&["alpha"]));
    assert_eq!(panel.results()[1].text, "$root$Nb");

    panel.set_results(ids(&["$root$Na"]), ids(&["alpha", "beta"]));
    assert_eq!(panel.results().len(), 1);
    assert_eq!(panel.results()[0].text, "alpha");
}

#[rstest]
#[case::next_from_nothing(Navigation::Next, None, 0)]
#[case::next_wraps(Navigation::Next, Some(2), 0)]
#[case::previous_from_nothing(Navigation::Previous, None, 2)]
#[case::previous_wraps(Navigation::Previous, Some(0), 2)]
#[case::previous(Navigation::Previous, Some(2), 1)]
#[case::first(Navigation::First, Some(1), 0)]
#[case::last(Navigation::Last, None, 2)]
fn navigation_wraps_around(
    mut searched: SearchPanel,
    #[case] navigation: Navigation,
    #[case] from: Option<usize>,
    #[case] expected: usize,
) {
    if let Some(from) = from {
        searched.select(from);
    }
    assert!(searched.navigate(navigation));
    assert_eq!(searched.selected(), Some(expected));
}

#[rstest]
fn navigation_without_results_is_a_no_op(mut panel: SearchPanel) {
    let rev = panel.rev();
    assert!(!panel.navigate(Navigation::Next));
    assert!(panel.activate().is_empty());
    assert_eq!(panel.rev(), rev);
}

#[rstest]
fn enter_steps_through_results_and_pans(mut searched: SearchPanel) {
    assert_eq!(searched.activate(), vec![Action::fit_element("$root$Na")]);
    assert_eq!(searched.activate(), vec![Action::fit_element("$root$Nb")]);
    assert_eq!(searched.status().to_string(), "Result 2 of 3");
}

#[rstest]
fn enter_after_arrow_keys_pans_to_the_arrow_selection(mut searched: SearchPanel) {
    searched.navigate(Navigation::Last);
    assert_eq!(searched.activate(), vec![Action::fit_element("$root$Nc")]);
    assert_eq!(searched.selected(), Some(2));

    // The next Enter steps again.
    assert_eq!(searched.activate(), vec![Action::fit_element("$root$Na")]);
}

#[rstest]
fn click_selects_and_pans(mut searched: SearchPanel) {
    assert_eq!(searched.select(1), vec![Action::fit_element("$root$Nb")]);
    assert_eq!(searched.selected(), Some(1));
    assert!(searched.select(3).is_empty());
    assert_eq!(searched.selected(), Some(1));
}

#[rstest]
fn status_texts(mut panel: SearchPanel) {
    assert_eq!(panel.status(), SearchStatus::Idle);
    assert_eq!(panel.status().to_string(), "");

    panel.set_query("zzz");
    panel.set_results(Vec::new(), Vec::new());
    assert_eq!(panel.status().to_string(), "No results found");

    panel.set_error("regex parse error");
    assert_eq!(
        panel.status(),
        SearchStatus::Error("regex parse error".to_owned())
    );

    panel.clear_error();
    panel.set_results(ids(&["$root$Na"]), ids(&["alpha"]));
    assert_eq!(panel.status().to_string(), "Result 0 of 1");
}

#[rstest]
fn close_hides_clears_and_asks_the_host_to_hide(mut searched: SearchPanel) {
    searched.toggle_tag_input();
    searched.set_error("boom");

    let actions = searched.close();
    assert_eq!(
        actions,
        vec![
            Action::ClearHighlights,
            Action::ToggleSearchBar {
                visibility: SearchBarVisibility::Hide
            }
        ]
    );
    assert!(!searched.is_visible());
    assert!(!searched.is_tag_input_visible());
    assert!(!searched.has_error());
    assert_eq!(searched.status(), SearchStatus::Idle);
}

#[rstest]
fn host_visibility_requests_toggle_the_panel(mut panel: SearchPanel) {
    assert_eq!(
        panel.set_visibility(SearchBarVisibility::Hide),
        vec![Action::ClearHighlights]
    );
    assert!(!panel.is_visible());
    assert!(panel.set_visibility(SearchBarVisibility::Show).is_empty());
    assert!(panel.is_visible());
}

#[rstest]
fn every_visible_change_bumps_rev(mut panel: SearchPanel) {
    let start = panel.rev();
    panel.set_query("a");
    panel.toggle_regex();
    panel.set_results(ids(&["$root$Na"]), ids(&["a"]));
    assert_eq!(panel.rev(), start + 3);

    panel.clear_error();
    assert_eq!(panel.rev(), start + 3);
}

#[rstest]
fn regex_errors_from_the_matcher_are_shown(mut panel: SearchPanel) {
    panel.toggle_regex();
    let actions = panel.set_query("(");
    let request = SearchRequest::from_action(&actions[1]).expect("search action");

    let candidates: [SearchCandidate; 0] = [];
    panel.apply_outcome(search_elements(&candidates, &request));

    assert!(panel.has_error());
    assert!(matches!(panel.status(), SearchStatus::Error(_)));
    assert!(panel.results().is_empty());
}

#[rstest]
fn selected_path_describes_the_selection(mut searched: SearchPanel) {
    assert_eq!(searched.selected_path(), None);
    searched.select(0);
    assert_eq!(
        searched.selected_path(),
        Some(super::describe_element("$root$Na"))
    );
}
