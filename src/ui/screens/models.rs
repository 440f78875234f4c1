use crate::i18n::LabelTable;
use crate::models::REFERENCE_MODEL_ACCURACIES;
use crate::ui::components::accuracy_gauge;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Reference accuracy figures. Display only.
pub struct ModelsScreen<'a> {
    labels: &'a LabelTable,
}

impl<'a> ModelsScreen<'a> {
    pub fn new(labels: &'a LabelTable) -> Self {
        Self { labels }
    }
}

impl Widget for ModelsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(REFERENCE_MODEL_ACCURACIES.iter().map(|_| Constraint::Length(4)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        Paragraph::new(Line::from(Span::styled(
            self.labels.model_perf.as_str(),
            Theme::title(),
        )))
        .render(chunks[0], buf);

        for (i, model) in REFERENCE_MODEL_ACCURACIES.iter().enumerate() {
            accuracy_gauge(self.labels.model_name(model.name), model).render(chunks[i + 1], buf);
        }

        let nav = Line::from(vec![
            Span::styled("[1]", Theme::nav_key()),
            Span::styled("Advisor ", Theme::nav_label()),
            Span::styled("[l]", Theme::nav_key()),
            Span::styled("Language ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        let last = chunks.len() - 1;
        Paragraph::new(nav).render(chunks[last], buf);
    }
}
