use crate::models::{Measurement, ModelAccuracy};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Labelled value with a one-line bar underneath.
pub struct GaugeWidget<'a> {
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    min: f64,
    max: f64,
    color: fn(f64) -> Color,
    precision: usize,
}

fn plain(_: f64) -> Color {
    Theme::FG
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: Option<f64>, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            color: plain,
            precision: 1,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn colored(mut self, color: fn(f64) -> Color) -> Self {
        self.color = color;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn ratio(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(value) = self.value else {
            Paragraph::new(Line::from(Span::styled("N/A", Theme::dim()))).render(inner, buf);
            return;
        };

        let color = (self.color)(value);
        let value_str = format!("{:.prec$} {}", value, self.unit, prec = self.precision);
        Paragraph::new(Line::from(Span::styled(value_str, Style::default().fg(color))))
            .render(inner, buf);

        if inner.height >= 2 {
            let bar_y = inner.y + 1;
            let filled = (inner.width as f64 * self.ratio(value)) as u16;

            for x in inner.x..inner.x + inner.width {
                let ch = if x < inner.x + filled { '█' } else { '░' };
                buf[(x, bar_y)].set_char(ch).set_fg(color);
            }
        }
    }
}

/// Gauge for one soil reading, colored by the band the rules put it in.
pub fn reading_gauge(title: &str, measurement: Measurement, value: Option<f64>) -> GaugeWidget<'_> {
    let gauge = GaugeWidget::new(title, value, measurement.unit());
    match measurement {
        Measurement::Nitrogen | Measurement::Phosphorous | Measurement::Potassium => gauge
            .range(0.0, 140.0)
            .precision(0)
            .colored(Theme::nutrient_color),
        Measurement::Moisture => gauge
            .range(0.0, 100.0)
            .precision(0)
            .colored(Theme::moisture_color),
        Measurement::Temperature => gauge.range(0.0, 50.0),
        Measurement::Humidity => gauge.range(0.0, 100.0).precision(0),
    }
}

pub fn accuracy_gauge<'a>(title: &'a str, model: &ModelAccuracy) -> GaugeWidget<'a> {
    GaugeWidget::new(title, Some(model.percent()), "%")
        .range(80.0, 100.0)
        .colored(|pct| {
            if pct >= 95.0 {
                Theme::SUCCESS
            } else if pct >= 90.0 {
                Theme::HIGHLIGHT
            } else {
                Theme::WARNING
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::REFERENCE_MODEL_ACCURACIES;

    #[test]
    fn ratio_is_clamped() {
        let gauge = GaugeWidget::new("N", Some(0.0), "").range(0.0, 100.0);
        assert_eq!(gauge.ratio(-5.0), 0.0);
        assert_eq!(gauge.ratio(50.0), 0.5);
        assert_eq!(gauge.ratio(250.0), 1.0);
    }

    #[test]
    fn renders_value_and_bar() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        reading_gauge("N", Measurement::Nitrogen, Some(70.0)).render(area, &mut buf);

        let value_row: String = (1..19).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(value_row.starts_with("70 ppm"));
        assert_eq!(buf[(1, 2)].symbol(), "█");
        assert_eq!(buf[(18, 2)].symbol(), "░");
    }

    #[test]
    fn gauge_shows_measurement_unit() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        reading_gauge("T", Measurement::Temperature, Some(25.0)).render(area, &mut buf);

        let value_row: String = (1..19).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(value_row.starts_with("25.0 °C"));
    }

    #[test]
    fn missing_value_shows_na() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        reading_gauge("T", Measurement::Temperature, None).render(area, &mut buf);
        assert_eq!(buf[(1, 1)].symbol(), "N");
        assert_eq!(buf[(2, 1)].symbol(), "/");
    }

    #[test]
    fn accuracy_colors() {
        let best = accuracy_gauge("DT", &REFERENCE_MODEL_ACCURACIES[0]);
        assert_eq!((best.color)(98.5), Theme::SUCCESS);
        assert_eq!((best.color)(89.2), Theme::WARNING);
    }
}
