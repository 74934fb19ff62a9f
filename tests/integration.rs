// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::config::{self, Config, GeneralConfig, OverlayConfig};
use iced_lightbox::directory_scanner;
use iced_lightbox::i18n::fluent::I18n;
use iced_lightbox::image_source::ImageSource;
use iced_lightbox::ui::lightbox::input::{InputEvent, KeyInput, PressTarget};
use iced_lightbox::ui::lightbox::{Effect, Message, OverlayStyle, State};
use tempfile::tempdir;

fn sources(count: usize) -> Vec<ImageSource> {
    (0..count)
        .map(|i| ImageSource::parse(&format!("photo-{i}.jpg")))
        .collect()
}

fn send(state: &mut State, event: InputEvent) -> Effect {
    state.update(Message::Input(event))
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("lightbox-close"), "Close");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("lightbox-close"), "Fermer");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_overlay_settings_flow_into_style() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    let config = Config {
        overlay: OverlayConfig {
            background: Some("#112233".to_string()),
            padding: Some(-10.0),
            placeholder: Some(false),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("write config");

    let loaded = config::load_from_path(&path).expect("load config");
    let style = OverlayStyle::from_config(&loaded);
    assert_eq!(style.background, iced::Color::from_rgb8(0x11, 0x22, 0x33));
    assert_eq!(style.padding, config::MIN_OVERLAY_PADDING);
    assert!(!style.placeholder);
}

#[test]
fn test_right_arrow_cycles_through_three_images() {
    let mut state = State::new(sources(3), Some(0), OverlayStyle::default());
    let mut visited = vec![state.current_index()];
    for _ in 0..3 {
        send(&mut state, InputEvent::Key(KeyInput::ArrowRight));
        visited.push(state.current_index());
    }
    assert_eq!(visited, [0, 1, 2, 0]);
}

#[test]
fn test_vim_keys_navigate() {
    let mut state = State::new(sources(3), Some(0), OverlayStyle::default());
    send(&mut state, InputEvent::Key(KeyInput::Character('h')));
    assert_eq!(state.current_index(), 2);
    send(&mut state, InputEvent::Key(KeyInput::Character('l')));
    assert_eq!(state.current_index(), 0);
}

#[test]
fn test_wheel_scroll_up_from_last_goes_back() {
    let mut state = State::new(sources(3), Some(2), OverlayStyle::default());
    send(&mut state, InputEvent::Wheel { delta_y: 1.0 });
    assert_eq!(state.current_index(), 1);
    send(&mut state, InputEvent::Wheel { delta_y: -1.0 });
    assert_eq!(state.current_index(), 2);
}

#[test]
fn test_single_image_has_no_navigation() {
    let mut state = State::new(sources(1), None, OverlayStyle::default());
    assert!(!state.shows_navigation());
    send(&mut state, InputEvent::Key(KeyInput::ArrowRight));
    assert_eq!(state.current_index(), 0);
}

#[test]
fn test_clicks_inside_and_outside_the_image() {
    let mut state = State::new(sources(2), None, OverlayStyle::default());
    assert_eq!(send(&mut state, InputEvent::Press(PressTarget::Image)), Effect::None);
    assert_eq!(
        send(&mut state, InputEvent::Press(PressTarget::Backdrop)),
        Effect::Close
    );
}

#[test]
fn test_listeners_are_gone_after_teardown() {
    let mut state = State::new(sources(3), Some(1), OverlayStyle::default());
    assert_eq!(send(&mut state, InputEvent::Key(KeyInput::Escape)), Effect::Close);

    state.teardown();
    assert!(!state.is_listening());
    assert_eq!(send(&mut state, InputEvent::Key(KeyInput::Escape)), Effect::None);
    assert_eq!(
        send(&mut state, InputEvent::Wheel { delta_y: -4.0 }),
        Effect::None
    );
    assert_eq!(state.current_index(), 1);
}

#[test]
fn test_directory_argument_expands_to_sorted_images() {
    let dir = tempdir().expect("temp dir");
    for name in ["b.png", "a.jpg", "notes.txt"] {
        std::fs::write(dir.path().join(name), b"").expect("write fixture");
    }

    let arg = dir.path().to_string_lossy().into_owned();
    let images = directory_scanner::expand_arguments(&[arg]);
    assert_eq!(
        images,
        vec![
            ImageSource::Path(dir.path().join("a.jpg")),
            ImageSource::Path(dir.path().join("b.png")),
        ]
    );
}

#[test]
fn test_unreadable_image_renders_as_unavailable() {
    let dir = tempdir().expect("temp dir");
    let broken = dir.path().join("broken.png");
    std::fs::write(&broken, b"not a png").expect("write fixture");

    let state = State::new(vec![ImageSource::Path(broken)], None, OverlayStyle::default());
    assert!(state.is_current_unavailable());
}
