use crate::app::{AdvisorState, LastResult};
use crate::i18n::{LabelTable, LocalizedRecommendation};
use crate::models::{CropType, Measurement, SoilType};
use crate::ui::components::{reading_gauge, InputWidget, SelectWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorField {
    Soil,
    Crop,
    Nitrogen,
    Phosphorous,
    Potassium,
    Temperature,
    Humidity,
    Moisture,
    Submit,
}

impl AdvisorField {
    pub fn all() -> &'static [AdvisorField] {
        &[
            AdvisorField::Soil,
            AdvisorField::Crop,
            AdvisorField::Nitrogen,
            AdvisorField::Phosphorous,
            AdvisorField::Potassium,
            AdvisorField::Temperature,
            AdvisorField::Humidity,
            AdvisorField::Moisture,
            AdvisorField::Submit,
        ]
    }

    pub fn measurement(&self) -> Option<Measurement> {
        match self {
            AdvisorField::Nitrogen => Some(Measurement::Nitrogen),
            AdvisorField::Phosphorous => Some(Measurement::Phosphorous),
            AdvisorField::Potassium => Some(Measurement::Potassium),
            AdvisorField::Temperature => Some(Measurement::Temperature),
            AdvisorField::Humidity => Some(Measurement::Humidity),
            AdvisorField::Moisture => Some(Measurement::Moisture),
            AdvisorField::Soil | AdvisorField::Crop | AdvisorField::Submit => None,
        }
    }

    fn position(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.position() + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

pub struct AdvisorScreen<'a> {
    labels: &'a LabelTable,
    state: &'a AdvisorState,
    result: Option<&'a LastResult>,
    shown: Option<LocalizedRecommendation>,
    status: Option<&'a str>,
}

impl<'a> AdvisorScreen<'a> {
    pub fn new(labels: &'a LabelTable, state: &'a AdvisorState) -> Self {
        Self {
            labels,
            state,
            result: None,
            shown: None,
            status: None,
        }
    }

    pub fn with_result(
        mut self,
        result: Option<&'a LastResult>,
        shown: Option<LocalizedRecommendation>,
    ) -> Self {
        self.result = result;
        self.shown = shown;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }
}

impl Widget for AdvisorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Subtitle
                Constraint::Min(22),   // Content
                Constraint::Length(1), // Status
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(self.labels.title.as_str(), Theme::title()),
            Span::styled(format!("  [{}]", self.labels.language), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);
        Paragraph::new(Span::styled(self.labels.subtitle.as_str(), Theme::dim()))
            .render(chunks[1], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[2]);

        self.render_form(content[0], buf);
        self.render_result(content[1], buf);

        if let Some(status) = self.status {
            Paragraph::new(Span::styled(status, Theme::error())).render(chunks[3], buf);
        }

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Navigate ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Edit/Select ", Theme::nav_label()),
            Span::styled("[←→]", Theme::nav_key()),
            Span::styled("Cycle ", Theme::nav_label()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Recommend ", Theme::nav_label()),
            Span::styled("[l]", Theme::nav_key()),
            Span::styled("Language ", Theme::nav_label()),
            Span::styled("[2]", Theme::nav_key()),
            Span::styled("Models ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[4], buf);
    }
}

impl AdvisorScreen<'_> {
    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),  // Soil and crop
                Constraint::Length(11), // Readings
                Constraint::Length(3),  // Submit
            ])
            .split(area);

        self.render_selects(sections[0], buf);
        self.render_readings(sections[1], buf);

        let focused = self.state.focused_field == AdvisorField::Submit;
        let style = if focused {
            Theme::selected()
        } else {
            Theme::highlight()
        };
        let border = if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);
        let inner = block.inner(sections[2]);
        block.render(sections[2], buf);
        Paragraph::new(Span::styled(self.labels.get_button.as_str(), style)).render(inner, buf);
    }

    fn render_selects(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.labels.soil_crop.as_str())
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(inner);

        let soils: Vec<&str> = SoilType::all().iter().map(|s| self.labels.soil(*s)).collect();
        SelectWidget::new(&self.labels.soil_type, &soils, self.state.soil_index)
            .focused(self.state.focused_field == AdvisorField::Soil)
            .render(rows[0], buf);

        let crops: Vec<&str> = CropType::all().iter().map(|c| self.labels.crop(*c)).collect();
        SelectWidget::new(&self.labels.crop_type, &crops, self.state.crop_index)
            .focused(self.state.focused_field == AdvisorField::Crop)
            .render(rows[1], buf);
    }

    fn render_readings(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.labels.nutrient_title.as_str())
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(inner);

        let problems = self.state.reading_input().problems();

        for (i, measurement) in Measurement::all().iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[i / 2]);

            let focused = self.state.focused_field.measurement() == Some(*measurement);
            let editing = focused && self.state.editing;
            let value = if editing {
                self.state.edit_buffer.as_str()
            } else {
                self.state.value(*measurement)
            };
            let invalid = !editing && problems.iter().any(|(m, _)| m == measurement);

            InputWidget::new(self.labels.measurement(*measurement), value)
                .focused(focused)
                .editing(editing)
                .invalid(invalid)
                .render(cols[i % 2], buf);
        }
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.labels.recommended.as_str())
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());
        let inner = block.inner(area);
        block.render(area, buf);

        let (Some(result), Some(shown)) = (self.result, self.shown.as_ref()) else {
            Paragraph::new(Span::styled(self.labels.helper.as_str(), Theme::dim()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        };

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(4)])
            .split(inner);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", shown.heading), Theme::header()),
                Span::styled(shown.fertilizer.as_str(), Theme::title()),
            ]),
            Line::from(""),
        ];
        if let Some(summary) = &shown.summary {
            lines.push(Line::from(Span::styled(summary.as_str(), Theme::highlight())));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(shown.reason.as_str(), Theme::normal())));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "{} / {} - {}",
                self.labels.soil(result.profile.soil_type),
                self.labels.crop(result.profile.crop_type),
                result.computed_at.format("%H:%M:%S")
            ),
            Theme::dim(),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(parts[0], buf);

        let gauges = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(parts[1]);

        let shown_measurements = [
            Measurement::Nitrogen,
            Measurement::Phosphorous,
            Measurement::Potassium,
            Measurement::Moisture,
        ];
        for (slot, measurement) in shown_measurements.iter().enumerate() {
            reading_gauge(
                measurement.symbol(),
                *measurement,
                result.reading.value(*measurement),
            )
            .render(gauges[slot], buf);
        }
    }
}
