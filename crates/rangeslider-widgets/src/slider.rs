//! The range slider widget: painting plus pointer wiring.

use egui::{
    pos2, vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Painter, Pos2, Rect, Response,
    Sense, Stroke, Ui,
};
use rangeslider_core::{
    format_value, fraction_from_position, RangeSlider, SliderEvent, SliderView,
};

use crate::colors::region_color;
use crate::{sizing, theme};

/// Visual configuration for the slider widget.
#[derive(Clone, Debug)]
pub struct SliderStyle {
    /// Track height
    pub track_height: f32,
    /// Whether to draw the tick scale below the track
    pub show_ticks: bool,
    /// Track background color
    pub track_color: Color32,
    /// Value fill and preview color
    pub accent_color: Color32,
    /// Marker dot and label color
    pub marker_color: Color32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_height: sizing::TRACK_HEIGHT,
            show_ticks: true,
            track_color: theme::TRACK,
            accent_color: theme::ACCENT,
            marker_color: theme::MARKER,
        }
    }
}

/// An interactive range slider bound to a `RangeSlider`.
///
/// Hovering updates the current value, clicking the track toggles a point
/// at that value, and clicking a marker label removes that point.
pub struct RangeSliderWidget<'a> {
    slider: &'a mut RangeSlider,
    style: SliderStyle,
    width: Option<f32>,
}

impl<'a> RangeSliderWidget<'a> {
    /// Create a widget for a slider.
    pub fn new(slider: &'a mut RangeSlider) -> Self {
        Self {
            slider,
            style: SliderStyle::default(),
            width: None,
        }
    }

    /// Set the widget style.
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Set a fixed width (defaults to the available width).
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the track height.
    pub fn height(mut self, height: f32) -> Self {
        self.style.track_height = height;
        self
    }

    /// Show or hide the tick scale.
    pub fn show_ticks(mut self, show: bool) -> Self {
        self.style.show_ticks = show;
        self
    }

    /// Show the slider. The returned response is the track's; it is marked
    /// changed when the value, hover state or points changed.
    pub fn show(self, ui: &mut Ui) -> Response {
        let Self {
            slider,
            style,
            width,
        } = self;

        let width = width.unwrap_or_else(|| ui.available_width());
        let tick_row = if style.show_ticks { sizing::TICK_ROW } else { 0.0 };
        let height = sizing::PREVIEW_ROW + sizing::LABEL_ROW + style.track_height + tick_row;
        let (rect, area) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

        let track_rect = Rect::from_min_size(
            pos2(rect.left(), rect.top() + sizing::PREVIEW_ROW + sizing::LABEL_ROW),
            vec2(width, style.track_height),
        );
        let mut track = ui.interact(track_rect, area.id.with("track"), Sense::click());

        let mut changed = false;
        if track.hovered() != slider.is_hovered() {
            let event = if track.hovered() {
                SliderEvent::PointerEnter
            } else {
                SliderEvent::PointerLeave
            };
            changed |= slider.handle_event(event).changed();
        }
        if let Some(pos) = track.hover_pos() {
            let fraction = fraction_from_position(
                f64::from(pos.x),
                f64::from(track_rect.left()),
                f64::from(track_rect.width()),
            );
            changed |= slider.handle_event(SliderEvent::PointerMove { fraction }).changed();
        }
        if track.clicked() {
            changed |= slider.handle_event(SliderEvent::Activate).changed();
        }

        let mut dismissed = Vec::new();
        if ui.is_rect_visible(rect) {
            let view = SliderView::of(slider);
            let painter = ui.painter();

            paint_track(painter, track_rect, &view, &style);
            if style.show_ticks {
                paint_ticks(painter, track_rect, &view);
            }

            for (index, marker) in view.markers.iter().enumerate() {
                let x = fraction_x(track_rect, marker.fraction);
                painter.line_segment(
                    [pos2(x, track_rect.top() - 4.0), pos2(x, track_rect.bottom() - 4.0)],
                    Stroke::new(1.0, theme::MAJOR_TICK),
                );
                painter.circle_filled(
                    pos2(x, track_rect.center().y),
                    sizing::MARKER_RADIUS,
                    style.marker_color,
                );

                let label_center = pos2(x, track_rect.top() - sizing::LABEL_ROW / 2.0);
                let label_rect = paint_label(
                    painter,
                    label_center,
                    &format_value(marker.point),
                    style.marker_color,
                );
                let label = ui
                    .interact(label_rect, area.id.with(("marker", index)), Sense::click())
                    .on_hover_cursor(CursorIcon::PointingHand);
                if label.clicked() {
                    dismissed.push(marker.point);
                }
            }

            if view.show_preview {
                let x = fraction_x(track_rect, view.pointer_fraction);
                let center = pos2(x, rect.top() + sizing::PREVIEW_ROW / 2.0);
                paint_label(painter, center, &format_value(view.value), style.accent_color);
            }
        }

        for point in dismissed {
            changed |= slider.handle_event(SliderEvent::DismissPoint { point }).changed();
        }

        if changed {
            track.mark_changed();
        }
        if slider.is_hovered() {
            track = track.on_hover_cursor(CursorIcon::PointingHand);
        }
        track
    }
}

/// Screen x of a track fraction.
fn fraction_x(track: Rect, fraction: f64) -> f32 {
    track.left() + fraction as f32 * track.width()
}

/// Draw the track background, region bands and value fill.
fn paint_track(painter: &Painter, track: Rect, view: &SliderView<'_>, style: &SliderStyle) {
    let pill = CornerRadius::same((track.height() / 2.0).min(255.0) as u8);
    painter.rect_filled(track, pill, style.track_color);

    for band in &view.bands {
        let left = fraction_x(track, band.start_fraction);
        let right = left + band.width_fraction as f32 * track.width();
        let band_rect = Rect::from_x_y_ranges(left..=right, track.y_range());
        painter.rect_filled(band_rect, CornerRadius::ZERO, region_color(band.region));
    }

    let thickness = view.line_thickness;
    let fill = Rect::from_min_max(
        pos2(track.left(), track.center().y - thickness / 2.0),
        pos2(fraction_x(track, view.value_fraction), track.center().y + thickness / 2.0),
    );
    let rounded = CornerRadius::same((thickness / 2.0).min(255.0) as u8);
    painter.rect_filled(fill, rounded, style.accent_color);
}

/// Draw tick marks rising from the track bottom, with labels under majors.
fn paint_ticks(painter: &Painter, track: Rect, view: &SliderView<'_>) {
    for tick in &view.ticks {
        let x = fraction_x(track, tick.fraction);
        let (length, color) = if tick.major {
            (sizing::MAJOR_TICK, theme::MAJOR_TICK)
        } else {
            (sizing::MINOR_TICK, theme::MINOR_TICK)
        };
        painter.line_segment(
            [pos2(x, track.bottom()), pos2(x, track.bottom() - length)],
            Stroke::new(2.0, color),
        );

        if let Some(label) = tick.label() {
            painter.text(
                pos2(x, track.bottom() + 3.0),
                Align2::CENTER_TOP,
                label,
                FontId::proportional(12.0),
                theme::TEXT_MUTED,
            );
        }
    }
}

/// Draw a white-on-color pill label centered at `center`; returns its rect.
fn paint_label(painter: &Painter, center: Pos2, text: &str, color: Color32) -> Rect {
    let galley =
        painter.layout_no_wrap(text.to_string(), FontId::proportional(12.0), Color32::WHITE);
    let rect = Rect::from_center_size(center, galley.size() + vec2(16.0, 8.0));
    painter.rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), color);
    painter.galley(rect.center() - galley.size() / 2.0, galley, Color32::WHITE);
    rect
}
