// SPDX-License-Identifier: MPL-2.0
use iced_dropzone::config::{self, Config, GeneralConfig, UploaderConfig};
use iced_dropzone::i18n::fluent::I18n;
use iced_dropzone::media::{read_as_data_url, AcceptedFormats, PickedFile};
use iced_dropzone::ui::uploader::{self, ErrorDisplayDuration, Event, Message};
use std::path::PathBuf;
use tempfile::tempdir;

fn uploader_with_defaults() -> uploader::State {
    uploader::State::new(
        AcceptedFormats::new(["jpg", "jpeg", "png"]),
        ErrorDisplayDuration::from_millis(None),
    )
}

#[tokio::test]
async fn dropping_png_previews_and_reports_once() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("photo.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).expect("write png");

    let mut state = uploader_with_defaults();
    state.update(Message::FileHovered);
    let (event, _task) = state.update(Message::FileDropped(path.clone()));
    assert!(matches!(event, Event::None));
    assert!(!state.error().is_active());

    // The decode task runs on the runtime; complete it here
    let encoded = read_as_data_url(PickedFile::from_path(&path)).await;
    let (event, _task) = state.update(Message::DecodeCompleted(encoded));

    let uploaded = match event {
        Event::ImageUploaded(uploaded) => uploaded,
        Event::None => panic!("expected an upload event"),
    };
    assert_eq!(uploaded.file.path(), path);
    assert!(uploaded
        .data_url
        .as_str()
        .starts_with("data:image/png;base64,"));
    assert_eq!(
        state.preview().map(|p| p.data_url().as_str()),
        Some(uploaded.data_url.as_str())
    );
}

#[test]
fn dropping_gif_shows_error_until_dismissed() {
    let mut state = uploader_with_defaults();
    assert_eq!(state.error_display().millis(), 400);

    state.update(Message::FileHovered);
    let (event, _task) = state.update(Message::FileDropped(PathBuf::from("/tmp/anim.gif")));

    assert!(matches!(event, Event::None));
    assert!(state.error().is_active());
    assert_eq!(state.error().message(), "File type is not valid");
    assert!(state.preview().is_none());

    let (event, _task) = state.update(Message::ErrorExpired(1));
    assert!(matches!(event, Event::None));
    assert!(!state.error().is_active());
    assert_eq!(state.error().message(), "");
}

#[test]
fn error_text_is_localized() {
    let en = I18n::new(Some("en-US".to_string()), &Config::default());
    let fr = I18n::new(Some("fr".to_string()), &Config::default());

    assert_eq!(
        en.tr("uploader-error-unsupported-format"),
        "File type is not valid"
    );
    assert_eq!(
        fr.tr("uploader-error-unsupported-format"),
        "Le type de fichier n'est pas valide"
    );
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
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn uploader_settings_come_from_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        uploader: UploaderConfig {
            accepted_formats: Some(vec!["webp".to_string()]),
            error_display_ms: Some(1_000),
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let (formats, duration) =
        iced_dropzone::app::resolve_uploader_settings(&Default::default(), &loaded);
    let mut state = uploader::State::new(formats, duration);

    state.update(Message::FilePicked(Some(PickedFile::from_path("/tmp/a.png"))));
    assert!(state.error().is_active());
    assert_eq!(state.error_display().millis(), 1_000);
}
