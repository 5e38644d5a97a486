//! Card board: two sortable card groups built from a dashboard configuration,
//! with archive and unarchive.
//!
//! Every mutation leaves `order` dense (`1..=len`) in both groups. Only the
//! personal configuration tracks unsaved changes.

use contracts::dashboards::d400_indicator_board::{
    DashboardConfig, DashboardDef, WidgetDef, WidgetRef, PERSONAL_CONFIG,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardGroup {
    Number,
    Graph,
}

impl CardGroup {
    pub fn of(widget: &WidgetDef) -> Self {
        if widget.is_number() {
            CardGroup::Number
        } else {
            CardGroup::Graph
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Unique within the board, stable across reorders
    pub id: u64,
    pub widget_id: String,
    pub order: u32,
    pub title: String,
    pub widget_type: String,
    pub info: Option<String>,
    pub link: Option<String>,
    /// Data endpoint of the widget
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardLayout {
    pub number_cards: Vec<Card>,
    pub graph_cards: Vec<Card>,
}

impl CardLayout {
    pub fn group(&self, group: CardGroup) -> &[Card] {
        match group {
            CardGroup::Number => &self.number_cards,
            CardGroup::Graph => &self.graph_cards,
        }
    }

    fn group_mut(&mut self, group: CardGroup) -> &mut Vec<Card> {
        match group {
            CardGroup::Number => &mut self.number_cards,
            CardGroup::Graph => &mut self.graph_cards,
        }
    }

    pub fn contains(&self, widget_id: &str) -> bool {
        self.number_cards
            .iter()
            .chain(self.graph_cards.iter())
            .any(|c| c.widget_id == widget_id)
    }

    pub fn len(&self) -> usize {
        self.number_cards.len() + self.graph_cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn densify(cards: &mut [Card]) {
    for (i, card) in cards.iter_mut().enumerate() {
        card.order = i as u32 + 1;
    }
}

/// Region of the screen where a dropped card is archived
pub trait ArchiveRegion {
    fn contains(&self, client_y: f64) -> bool;
}

/// Band at the bottom of the viewport: `clientY > h - (6% of h + 80)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportArchiveZone {
    pub inner_height: f64,
}

impl ViewportArchiveZone {
    pub fn threshold(&self) -> f64 {
        self.inner_height - (self.inner_height * 6.0 / 100.0 + 80.0)
    }
}

impl ArchiveRegion for ViewportArchiveZone {
    fn contains(&self, client_y: f64) -> bool {
        client_y > self.threshold()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Slot,
    Archive,
}

impl DropTarget {
    pub fn at(region: &impl ArchiveRegion, client_y: f64) -> Self {
        if region.contains(client_y) {
            DropTarget::Archive
        } else {
            DropTarget::Slot
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardBoard {
    pub config: DashboardConfig,
    pub active: String,
    pub layout: CardLayout,
    pub modified: bool,
    pub show_popout: bool,
    next_card_id: u64,
}

impl CardBoard {
    /// Cards of the `active` configuration, in saved order. Widgets missing
    /// from the catalogue are skipped.
    pub fn from_config(config: DashboardConfig, active: &str) -> Self {
        let mut board = Self {
            config,
            active: active.to_string(),
            layout: CardLayout::default(),
            modified: false,
            show_popout: false,
            next_card_id: 0,
        };

        let mut refs: Vec<WidgetRef> = board
            .config
            .dashboards
            .get(active)
            .map(|d| d.widgets.clone())
            .unwrap_or_default();
        refs.sort_by_key(|w| w.order);

        for widget_ref in refs {
            if board.layout.contains(&widget_ref.widget_id) {
                continue;
            }
            match board.config.dashboard_widgets.get(&widget_ref.widget_id).cloned() {
                Some(widget) => {
                    let group = CardGroup::of(&widget);
                    let card = board.new_card(&widget_ref.widget_id, &widget);
                    board.layout.group_mut(group).push(card);
                }
                None => log::warn!("dashboard {active}: unknown widget {}", widget_ref.widget_id),
            }
        }
        densify(&mut board.layout.number_cards);
        densify(&mut board.layout.graph_cards);
        board
    }

    fn new_card(&mut self, widget_id: &str, widget: &WidgetDef) -> Card {
        self.next_card_id += 1;
        Card {
            id: self.next_card_id,
            widget_id: widget_id.to_string(),
            order: 0,
            title: widget.title.clone(),
            widget_type: widget.widget_type.clone(),
            info: widget.info.clone(),
            link: widget.link.clone(),
            endpoint: widget.endpoint.clone(),
        }
    }

    pub fn is_personal(&self) -> bool {
        self.active == PERSONAL_CONFIG
    }

    /// Move a card within its group, or archive it when dropped on the
    /// archive region. Out-of-range `old_index` leaves the board unchanged;
    /// `new_index` is clamped to the group.
    pub fn reorder(
        &mut self,
        group: CardGroup,
        old_index: usize,
        new_index: usize,
        target: DropTarget,
    ) {
        let cards = self.layout.group_mut(group);
        if old_index >= cards.len() {
            return;
        }
        let card = cards.remove(old_index);
        match target {
            DropTarget::Archive => {
                log::debug!("archived widget {}", card.widget_id);
            }
            DropTarget::Slot => {
                let at = new_index.min(cards.len());
                cards.insert(at, card);
            }
        }
        densify(cards);

        if self.is_personal() && (old_index != new_index || target == DropTarget::Archive) {
            self.modified = true;
        }
    }

    /// Catalogue widgets that are not on the board, by widget id
    pub fn archived_widgets(&self) -> Vec<(&str, &WidgetDef)> {
        self.config
            .dashboard_widgets
            .iter()
            .filter(|(id, _)| !self.layout.contains(id))
            .map(|(id, widget)| (id.as_str(), widget))
            .collect()
    }

    pub fn has_archived(&self) -> bool {
        self.config.dashboard_widgets.len() > self.layout.len()
    }

    /// Put an archived widget back at the end of its group
    pub fn add_from_archive(&mut self, widget_id: &str) -> Option<CardGroup> {
        if self.layout.contains(widget_id) {
            return None;
        }
        let widget = self.config.dashboard_widgets.get(widget_id).cloned()?;
        let group = CardGroup::of(&widget);
        let mut card = self.new_card(widget_id, &widget);
        let cards = self.layout.group_mut(group);
        card.order = cards.len() as u32 + 1;
        cards.push(card);

        self.show_popout = self.has_archived();
        if self.is_personal() {
            self.modified = true;
        }
        Some(group)
    }

    pub fn toggle_popout(&mut self) {
        self.show_popout = self.has_archived() && !self.show_popout;
    }

    /// Widget list of the active configuration: numeric cards, then graph
    /// cards, each numbered from 1
    pub fn widget_refs(&self) -> Vec<WidgetRef> {
        self.layout
            .number_cards
            .iter()
            .enumerate()
            .chain(self.layout.graph_cards.iter().enumerate())
            .map(|(i, card)| WidgetRef {
                widget_id: card.widget_id.clone(),
                order: i as u32 + 1,
            })
            .collect()
    }

    /// Body of `POST /dashboard/config`: every configuration, with the
    /// active one carrying the current layout
    pub fn save_payload(&self) -> BTreeMap<String, DashboardDef> {
        let mut dashboards = self.config.dashboards.clone();
        dashboards
            .entry(self.active.clone())
            .or_default()
            .widgets = self.widget_refs();
        dashboards
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> DashboardConfig {
        serde_json::from_value(json!({
            "dashboards": {
                "personal": {
                    "name": "Personal",
                    "widgets": [
                        {"widgetId": "g1", "order": 1},
                        {"widgetId": "n2", "order": 2},
                        {"widgetId": "n1", "order": 1},
                        {"widgetId": "g2", "order": 2},
                        {"widgetId": "g3", "order": 3}
                    ]
                },
                "warehouse": {
                    "name": "Warehouse",
                    "widgets": [{"widgetId": "n1", "order": 1}, {"widgetId": "g1", "order": 1}]
                }
            },
            "dashboardWidgets": {
                "n1": {"title": "In stock", "type": "number"},
                "n2": {"title": "Expiring", "type": "number"},
                "n3": {"title": "Recalled", "type": "number"},
                "g1": {"title": "Fill rate", "type": "line"},
                "g2": {"title": "Stock", "type": "bar"},
                "g3": {"title": "Receipts", "type": "doughnut"}
            }
        }))
        .unwrap()
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.widget_id.as_str()).collect()
    }

    fn orders(cards: &[Card]) -> Vec<u32> {
        cards.iter().map(|c| c.order).collect()
    }

    #[test]
    fn test_groups_split_by_widget_type() {
        let board = CardBoard::from_config(config(), "personal");
        assert_eq!(ids(&board.layout.number_cards), vec!["n1", "n2"]);
        assert_eq!(ids(&board.layout.graph_cards), vec!["g1", "g2", "g3"]);
        assert_eq!(orders(&board.layout.graph_cards), vec![1, 2, 3]);
        assert!(!board.modified);
    }

    #[test]
    fn test_reorder_keeps_length_and_dense_order() {
        let len = 3;
        for old in 0..len {
            for new in 0..len {
                for target in [DropTarget::Slot, DropTarget::Archive] {
                    let mut board = CardBoard::from_config(config(), "personal");
                    board.reorder(CardGroup::Graph, old, new, target);
                    let cards = board.layout.group(CardGroup::Graph);
                    let expected = if target == DropTarget::Archive { len - 1 } else { len };
                    assert_eq!(cards.len(), expected);
                    assert_eq!(orders(cards), (1..=expected as u32).collect::<Vec<_>>());
                }
            }
        }
    }

    #[test]
    fn test_reorder_moves_card() {
        let mut board = CardBoard::from_config(config(), "personal");
        board.reorder(CardGroup::Graph, 0, 2, DropTarget::Slot);
        assert_eq!(ids(&board.layout.graph_cards), vec!["g2", "g3", "g1"]);
        assert_eq!(ids(&board.layout.number_cards), vec!["n1", "n2"]);
        assert!(board.modified);
    }

    #[test]
    fn test_drop_in_place_does_not_modify() {
        let mut board = CardBoard::from_config(config(), "personal");
        board.reorder(CardGroup::Number, 1, 1, DropTarget::Slot);
        assert!(!board.modified);
        board.reorder(CardGroup::Number, 1, 1, DropTarget::Archive);
        assert!(board.modified);
        assert_eq!(ids(&board.layout.number_cards), vec!["n1"]);
    }

    #[test]
    fn test_shared_configuration_never_modified() {
        let mut board = CardBoard::from_config(config(), "warehouse");
        board.reorder(CardGroup::Graph, 0, 0, DropTarget::Archive);
        board.reorder(CardGroup::Number, 0, 3, DropTarget::Slot);
        board.add_from_archive("g2");
        assert!(!board.modified);
    }

    #[test]
    fn test_out_of_range_reorder_is_ignored() {
        let mut board = CardBoard::from_config(config(), "personal");
        let before = board.layout.clone();
        board.reorder(CardGroup::Number, 5, 0, DropTarget::Archive);
        assert_eq!(board.layout, before);
        assert!(!board.modified);
    }

    #[test]
    fn test_add_from_archive_appends_to_matching_group() {
        let mut board = CardBoard::from_config(config(), "personal");
        assert_eq!(board.archived_widgets().len(), 1);

        assert_eq!(board.add_from_archive("n3"), Some(CardGroup::Number));
        assert_eq!(ids(&board.layout.number_cards), vec!["n1", "n2", "n3"]);
        assert_eq!(board.layout.number_cards[2].order, 3);
        assert!(board.modified);
        assert!(!board.show_popout);
        assert!(board.archived_widgets().is_empty());

        assert_eq!(board.add_from_archive("n3"), None);
        assert_eq!(board.add_from_archive("missing"), None);
    }

    #[test]
    fn test_popout_opens_only_with_archived_widgets() {
        let mut board = CardBoard::from_config(config(), "personal");
        board.toggle_popout();
        assert!(board.show_popout);
        board.toggle_popout();
        assert!(!board.show_popout);

        board.add_from_archive("n3");
        board.toggle_popout();
        assert!(!board.show_popout);
    }

    #[test]
    fn test_save_payload_replaces_active_widgets() {
        let mut board = CardBoard::from_config(config(), "personal");
        board.reorder(CardGroup::Graph, 2, 0, DropTarget::Slot);
        let payload = board.save_payload();

        let widgets: Vec<(String, u32)> = payload["personal"]
            .widgets
            .iter()
            .map(|w| (w.widget_id.clone(), w.order))
            .collect();
        assert_eq!(
            widgets,
            vec![
                ("n1".to_string(), 1),
                ("n2".to_string(), 2),
                ("g3".to_string(), 1),
                ("g1".to_string(), 2),
                ("g2".to_string(), 3),
            ]
        );
        assert_eq!(payload["personal"].name, "Personal");
        assert_eq!(payload["warehouse"], board.config.dashboards["warehouse"]);
    }

    #[test]
    fn test_viewport_archive_zone_threshold() {
        let zone = ViewportArchiveZone { inner_height: 1000.0 };
        assert_eq!(zone.threshold(), 860.0);
        assert_eq!(DropTarget::at(&zone, 861.0), DropTarget::Archive);
        assert_eq!(DropTarget::at(&zone, 860.0), DropTarget::Slot);
    }

    #[test]
    fn test_card_ids_unique() {
        let mut board = CardBoard::from_config(config(), "personal");
        board.add_from_archive("n3");
        let mut ids: Vec<u64> = board
            .layout
            .number_cards
            .iter()
            .chain(board.layout.graph_cards.iter())
            .map(|c| c.id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
