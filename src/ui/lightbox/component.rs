// SPDX-License-Identifier: MPL-2.0
//! Lightbox component: state, update and view.
//!
//! The owner creates the state with [`State::new`], forwards messages to
//! [`State::update`], renders [`State::view`] and merges
//! [`State::subscription`] into its own. When `update` returns
//! [`Effect::Close`], the owner is expected to call [`State::teardown`] and
//! drop the state.

use super::input::{action_for, Action, InputEvent, PressTarget};
use super::layout::{fallback_size, fit_within};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::image_navigation::{Direction, ImageNavigator};
use crate::image_source::ImageSource;
use crate::ui::components::checkerboard;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, container, image, mouse_area, responsive, text, tooltip, Column, Container, Row,
    Space, Stack,
};
use iced::{event, window, Color, ContentFit, Element, Length, Padding, Size, Subscription};

/// Distance between the affordances and the window edges.
const EDGE_INSET: f32 = 15.0;

const SLIDE_PORTION: u16 = 18;
const SLIDE_MARGIN_PORTION: u16 = 1;

/// Visual options applied to the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Backdrop colour.
    pub background: Color,
    /// Horizontal padding around the slide.
    pub padding: f32,
    /// Draw the checkerboard placeholder beneath images.
    pub placeholder: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            background: palette::BLACK,
            padding: config::DEFAULT_OVERLAY_PADDING,
            placeholder: config::DEFAULT_PLACEHOLDER_ENABLED,
        }
    }
}

impl OverlayStyle {
    /// Builds the style from the `[overlay]` config section.
    ///
    /// Unparseable colours fall back to the default backdrop.
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        let overlay = &config.overlay;

        let background = match overlay.background.as_deref() {
            Some(hex) => styles::overlay::parse_color(hex).unwrap_or_else(|| {
                tracing::warn!(value = hex, "invalid overlay background colour");
                defaults.background
            }),
            None => defaults.background,
        };

        Self {
            background,
            padding: overlay
                .padding
                .map(config::clamp_padding)
                .unwrap_or(defaults.padding),
            placeholder: overlay.placeholder.unwrap_or(defaults.placeholder),
        }
    }
}

/// Messages handled by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    Input(InputEvent),
}

/// What the owner must react to after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A dismissal gesture happened.
    Close,
}

/// Image under the cursor, resolved once per navigation.
#[derive(Debug, Clone)]
struct Slide {
    handle: Option<image::Handle>,
    dimensions: Option<Size<u32>>,
}

impl Slide {
    fn empty() -> Self {
        Self {
            handle: None,
            dimensions: None,
        }
    }

    fn resolve(source: Option<&ImageSource>) -> Self {
        let Some(source) = source else {
            return Self::empty();
        };

        let dimensions = match source.read_dimensions() {
            Ok(size) => Some(size),
            Err(err) => {
                tracing::warn!(image = %source, error = %err, "image unavailable");
                None
            }
        };

        Self {
            handle: dimensions.and(source.handle()),
            dimensions,
        }
    }
}

/// Context required to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Lightbox state.
#[derive(Debug, Clone)]
pub struct State {
    navigator: ImageNavigator,
    slide: Slide,
    style: OverlayStyle,
    listening: bool,
}

impl State {
    /// Opens the lightbox on `images`, starting at `start_index` (clamped).
    ///
    /// The returned state is listening for keyboard and wheel input until
    /// [`State::teardown`] is called.
    pub fn new(images: Vec<ImageSource>, start_index: Option<usize>, style: OverlayStyle) -> Self {
        let navigator = ImageNavigator::new(images, start_index);
        let slide = Slide::resolve(navigator.current());
        tracing::debug!(
            len = navigator.len(),
            index = navigator.current_index(),
            "lightbox opened"
        );

        Self {
            navigator,
            slide,
            style,
            listening: true,
        }
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Input(event) => self.handle_input(event),
        }
    }

    fn handle_input(&mut self, event: InputEvent) -> Effect {
        if !self.listening {
            tracing::debug!(?event, "input after teardown ignored");
            return Effect::None;
        }

        match action_for(&event) {
            Some(Action::Dismiss) => {
                tracing::debug!(?event, "lightbox dismissed");
                Effect::Close
            }
            Some(Action::Advance(direction)) => {
                self.advance(direction);
                Effect::None
            }
            None => Effect::None,
        }
    }

    /// Steps one image in `direction`, wrapping at either end.
    pub fn advance(&mut self, direction: Direction) {
        let before = self.navigator.current_index();
        self.navigator.advance(direction);
        let after = self.navigator.current_index();

        if before != after {
            tracing::debug!(from = before, to = after, step = direction.offset(), "advanced");
            self.slide = Slide::resolve(self.navigator.current());
        }
    }

    /// Stops listening for input. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.listening {
            self.listening = false;
            tracing::debug!("lightbox listeners removed");
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    pub fn current_image(&self) -> Option<&ImageSource> {
        self.navigator.current()
    }

    /// Whether the previous/next affordances are shown.
    pub fn shows_navigation(&self) -> bool {
        self.navigator.can_navigate()
    }

    /// Whether the current image failed to resolve.
    pub fn is_current_unavailable(&self) -> bool {
        !self.navigator.is_empty() && self.slide.dimensions.is_none()
    }

    /// Window-wide keyboard and wheel listener, active while listening.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.listening {
            event::listen_with(route_event)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        // The slide takes the middle 90% of the padded width.
        let slide = Row::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(Space::new().width(Length::FillPortion(SLIDE_MARGIN_PORTION)))
            .push(
                responsive(move |available: Size| self.view_slide(i18n, available))
                    .width(Length::FillPortion(SLIDE_PORTION)),
            )
            .push(Space::new().width(Length::FillPortion(SLIDE_MARGIN_PORTION)));
        let slide_layer = Container::new(slide)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding::ZERO.left(self.style.padding).right(self.style.padding));

        let close = affordance("\u{00d7}", typography::GLYPH_CLOSE, PressTarget::Close);
        let close_layer = Container::new(tooltip(
            close,
            text(i18n.tr("lightbox-close")).size(typography::BODY),
            tooltip::Position::Left,
        ))
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(Padding::ZERO.top(EDGE_INSET).right(EDGE_INSET));

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(slide_layer);

        if self.shows_navigation() {
            layers = layers.push(
                Row::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .push(navigation_zone(
                        "\u{276e}",
                        i18n.tr("lightbox-previous"),
                        PressTarget::Previous,
                    ))
                    .push(Space::new().width(Length::Fill))
                    .push(navigation_zone(
                        "\u{276f}",
                        i18n.tr("lightbox-next"),
                        PressTarget::Next,
                    )),
            );
        }

        layers = layers.push(close_layer);

        let backdrop = Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop(self.style.background));

        mouse_area(backdrop)
            .on_press(Message::Input(InputEvent::Press(PressTarget::Backdrop)))
            .into()
    }

    fn view_slide<'a>(&'a self, i18n: &I18n, available: Size) -> Element<'a, Message> {
        if self.navigator.is_empty() {
            return centered(text(i18n.tr("lightbox-empty")).size(typography::BODY));
        }

        let (size, picture): (Size, Element<'a, Message>) =
            match (self.slide.dimensions, &self.slide.handle) {
                (Some(dimensions), Some(handle)) => {
                    let size = fit_within(dimensions, available);
                    let picture = image(handle.clone())
                        .content_fit(ContentFit::Contain)
                        .width(Length::Fixed(size.width))
                        .height(Length::Fixed(size.height))
                        .into();
                    (size, picture)
                }
                _ => (
                    fallback_size(config::FALLBACK_PLACEHOLDER_SIZE, available),
                    Space::new().into(),
                ),
            };

        let framed: Element<'a, Message> = if self.style.placeholder {
            checkerboard::beneath(picture, size)
        } else {
            picture
        };

        let pressable =
            mouse_area(framed).on_press(Message::Input(InputEvent::Press(PressTarget::Image)));

        if self.is_current_unavailable() {
            centered(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(pressable)
                    .push(text(i18n.tr("lightbox-image-unavailable")).size(typography::BODY)),
            )
        } else {
            centered(pressable)
        }
    }
}

fn route_event(event: iced::Event, status: event::Status, _window: window::Id) -> Option<Message> {
    InputEvent::from_iced(&event, status).map(Message::Input)
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn affordance<'a>(glyph: &'a str, size: f32, target: PressTarget) -> Element<'a, Message> {
    button(text(glyph).size(size))
        .padding([0.0, EDGE_INSET])
        .style(styles::button::affordance(palette::WHITE))
        .on_press(Message::Input(InputEvent::Press(target)))
        .into()
}

/// Clickable strip along one edge, spanning the middle 80% of the height.
fn navigation_zone<'a>(glyph: &'a str, label: String, target: PressTarget) -> Element<'a, Message> {
    let arrow = tooltip(
        affordance(glyph, typography::GLYPH_NAV, target),
        text(label).size(typography::BODY),
        tooltip::Position::Bottom,
    );

    let zone = mouse_area(
        container(arrow)
            .height(Length::Fill)
            .align_y(Vertical::Center),
    )
    .on_press(Message::Input(InputEvent::Press(target)));

    Column::new()
        .height(Length::Fill)
        .push(Space::new().height(Length::FillPortion(1)))
        .push(container(zone).height(Length::FillPortion(8)))
        .push(Space::new().height(Length::FillPortion(1)))
        .into()
}
