use dimmer_core::{BarScene, DimmerPanel, Rgb};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Font, Pixels, Point, Rectangle, Renderer, Size, Theme, font, mouse};

/// Canvas program drawing the panel's brightness bar.
///
/// Drawing goes through `cache`; the app clears it whenever the panel
/// reports a state change, which forces a full repaint on the next frame.
pub struct BrightnessBar<'a> {
    panel: &'a DimmerPanel,
    cache: &'a Cache,
}

impl<'a> BrightnessBar<'a> {
    pub fn new(panel: &'a DimmerPanel, cache: &'a Cache) -> Self {
        Self { panel, cache }
    }
}

impl<Message> canvas::Program<Message> for BrightnessBar<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            draw_scene(frame, &self.panel.bar_scene());
        });
        vec![geometry]
    }
}

fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

fn draw_scene(frame: &mut Frame, scene: &BarScene) {
    let height = scene.geometry.height as f32;
    let full = Size::new(scene.geometry.width as f32, height);

    frame.fill_rectangle(Point::ORIGIN, full, color(Rgb::BACKGROUND));

    if let Some(fill) = &scene.fill {
        for (column, rgb) in fill.columns.iter().enumerate() {
            frame.fill_rectangle(
                Point::new(column as f32, 0.0),
                Size::new(1.0, height),
                color(*rgb),
            );
        }
        frame.stroke(
            &Path::rectangle(Point::ORIGIN, Size::new(fill.width as f32, height)),
            Stroke::default()
                .with_color(color(Rgb::OUTLINE))
                .with_width(1.0),
        );
    }

    frame.fill_text(Text {
        content: scene.label.text.clone(),
        position: Point::new(scene.label.x, scene.label.y),
        color: color(scene.label.tone.color()),
        size: Pixels(13.0),
        font: Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        },
        align_x: Horizontal::Center.into(),
        align_y: Vertical::Center.into(),
        ..Text::default()
    });

    // canvas border
    frame.stroke(
        &Path::rectangle(Point::ORIGIN, full),
        Stroke::default()
            .with_color(color(Rgb::BORDER))
            .with_width(1.0),
    );
}
