use crate::config::Config;
use crate::covers::artifact::{CacheDirective, ImageKind};
use crate::covers::pipeline::run_guarded;
use crate::covers::placeholder::{self, font_size, hex, hsl_to_rgb, placeholder_svg};
use crate::covers::processor::{self, DecodeLimits, contain_fit, needs_resize};
use crate::covers::request::{
    DEFAULT_QUALITY, Dimensions, ImageRequest, RequestMode, parse_quality,
};
use crate::covers::root::{CoverRoot, Resolution};
use crate::covers::seed::{FixedSeeds, HueSeed, hue_for_book};
use crate::covers::vector::{Pastel, open_book_svg};
use crate::covers::{CoverPipeline, raster};
use crate::error::AppError;
use crate::library::{CoverRef, cover_url};
use axum::http::StatusCode;
use image::{DynamicImage, Rgba, RgbaImage};
use std::sync::{Arc, mpsc};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn dims(width: u32, height: u32) -> Dimensions {
    Dimensions { width, height }
}

fn limits() -> DecodeLimits {
    DecodeLimits {
        max_dimension: 12_000,
        max_alloc: 256 * 1024 * 1024,
    }
}

fn write_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([180, 40, 40, 255]))
        .save(&path)
        .unwrap();
    path
}

fn test_pipeline(root: &std::path::Path, cache: bool) -> CoverPipeline {
    let mut config = Config::default();
    config.cache.enabled = cache;
    pipeline_with(root, &config)
}

fn pipeline_with(root: &std::path::Path, config: &Config) -> CoverPipeline {
    CoverPipeline::new(
        CoverRoot::open(root).unwrap(),
        config,
        Arc::new(FixedSeeds {
            hue: 200,
            unit: 0.5,
        }),
    )
}

#[test]
fn dimensions_accept_bounds() {
    assert_eq!(Dimensions::parse("1", "2000").unwrap(), dims(1, 2000));
    assert_eq!(Dimensions::parse("240", "360").unwrap(), dims(240, 360));
}

#[test]
fn dimensions_reject_out_of_range_and_garbage() {
    for (w, h) in [
        ("0", "10"),
        ("10", "2001"),
        ("5000", "10"),
        ("abc", "10"),
        ("10", ""),
        ("-5", "10"),
        ("10.5", "10"),
        ("+10", "10"),
        ("00010", "10"),
    ] {
        assert!(
            matches!(Dimensions::parse(w, h), Err(AppError::InvalidDimensions)),
            "{w}x{h} should be rejected"
        );
    }
}

#[test]
fn quality_defaults_and_clamps() {
    assert_eq!(parse_quality(None, 80), 80);
    assert_eq!(parse_quality(Some("abc"), 80), 80);
    assert_eq!(parse_quality(Some("NaN"), 80), 80);
    assert_eq!(parse_quality(Some("55"), 80), 55);
    assert_eq!(parse_quality(Some("55.9"), 80), 55);
    assert_eq!(parse_quality(Some("500"), 80), 100);
    assert_eq!(parse_quality(Some("0"), 80), 1);
    assert_eq!(parse_quality(Some("-20"), 80), 1);
}

#[test]
fn request_classifies_placeholder_token() {
    let req = ImageRequest::parse(
        "240",
        "360",
        "@placeholder",
        Some("book-042".to_string()),
        None,
        80,
    )
    .unwrap();
    assert_eq!(req.mode, RequestMode::Placeholder);
    assert_eq!(req.book_id.as_deref(), Some("book-042"));
    assert_eq!(req.quality, 80);
}

#[test]
fn request_real_image_drops_book_id() {
    let req = ImageRequest::parse(
        "100",
        "100",
        "series//book-1.jpg",
        Some("book-1".to_string()),
        Some("60"),
        80,
    )
    .unwrap();
    assert_eq!(req.mode, RequestMode::RealImage);
    assert_eq!(req.path_segments, vec!["series", "book-1.jpg"]);
    assert_eq!(req.book_id, None);
    assert_eq!(req.quality, 60);
}

#[test]
fn request_validates_dimensions_before_path() {
    let err = ImageRequest::parse("5000", "10", "../../secret.jpg", None, None, 80).unwrap_err();
    assert!(matches!(err, AppError::InvalidDimensions));
}

#[test]
fn hue_is_sum_of_code_units() {
    // 98+111+111+107+45+48+52+50 = 622
    assert_eq!(hue_for_book("book-042"), 262);
    assert_eq!(hue_for_book(""), 0);
    // U+1F4DA encodes as two UTF-16 units
    assert_eq!(hue_for_book("📚"), ((0xD83D + 0xDCDA) % 360) as u16);
}

#[test]
fn seed_resolution_tracks_determinism() {
    let fixed = FixedSeeds {
        hue: 725,
        unit: 0.0,
    };

    let book = HueSeed::resolve(Some("book-042"), &fixed);
    assert_eq!(book.hue, 262);
    assert!(book.deterministic);

    let random = HueSeed::resolve(None, &fixed);
    assert_eq!(random.hue, 5);
    assert!(!random.deterministic);
}

#[test]
fn label_font_shrinks_for_wide_thumbnails() {
    let close = |a: f32, b: f32| (a - b).abs() < 1e-3;
    assert!(close(font_size(dims(200, 300)), 20.0));
    assert!(close(font_size(dims(300, 300)), 30.0));
    assert!(close(font_size(dims(301, 300)), 24.0));
    assert!(close(font_size(dims(400, 600)), 32.0));
    assert!(close(font_size(dims(1000, 150)), 12.0));
}

#[test]
fn hsl_conversion() {
    assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255, 0, 0));
    assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), (0, 255, 0));
    assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), (0, 0, 255));
    assert_eq!(hsl_to_rgb(90.0, 0.0, 100.0), (255, 255, 255));
    assert_eq!(hex((255, 8, 171)), "#ff08ab");
}

#[test]
fn placeholder_svg_layers() {
    let svg = placeholder_svg(dims(240, 360), 262);
    assert!(svg.contains(r#"width="240" height="360""#));
    assert!(svg.contains("240×360"));
    assert!(svg.contains("<linearGradient"));
    assert!(svg.contains(r#"<pattern id="hatch" width="20" height="20""#));
    assert!(svg.contains(r#"x="12.00" y="18.00" width="216.00" height="324.00""#));
    assert!(svg.contains(&hex(hsl_to_rgb(262.0, 30.0, 85.0))));
    assert!(svg.contains(&hex(hsl_to_rgb(262.0, 30.0, 75.0))));
}

#[test]
fn placeholder_png_is_deterministic_for_book() {
    let seed = HueSeed::for_book("book-042");
    let a = placeholder::render_placeholder(dims(240, 360), seed, 80).unwrap();
    let b = placeholder::render_placeholder(dims(240, 360), seed, 80).unwrap();

    assert_eq!(a.bytes, b.bytes);
    assert_eq!(a.kind, ImageKind::Png);
    assert_eq!(a.cache, CacheDirective::Immutable);

    let decoded = image::load_from_memory(&a.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (240, 360));
}

#[test]
fn placeholder_png_from_random_seed_is_not_cacheable() {
    let seed = HueSeed::random(&FixedSeeds { hue: 10, unit: 0.0 });
    let artifact = placeholder::render_placeholder(dims(50, 80), seed, 20).unwrap();
    assert_eq!(artifact.cache, CacheDirective::NoStore);
    assert_eq!(artifact.mime_type(), "image/png");
}

#[test]
fn png_compression_tracks_quality() {
    assert!(matches!(raster::png_compression(1), png::Compression::Fast));
    assert!(matches!(raster::png_compression(50), png::Compression::Default));
    assert!(matches!(raster::png_compression(80), png::Compression::Best));
}

#[test]
fn rasterize_rejects_malformed_svg() {
    assert!(matches!(
        raster::rasterize_png("<svg", 80),
        Err(AppError::Render(_))
    ));
}

#[test]
fn pastel_foreground_contrast() {
    let light = Pastel {
        hue: 30.0,
        saturation: 50.0,
        lightness: 80.0,
    };
    assert_eq!(light.foreground(), hsl_to_rgb(30.0, 50.0, 25.0));

    let dark = Pastel {
        lightness: 60.0,
        ..light
    };
    assert_eq!(dark.foreground(), (255, 255, 255));
}

#[test]
fn open_book_svg_uses_pastel() {
    let pastel = Pastel::random(&FixedSeeds { hue: 90, unit: 1.0 });
    assert_eq!(pastel.lightness, 90.0);

    let svg = open_book_svg(dims(200, 300), pastel);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="200" height="300""#));
    assert!(svg.contains(&hex(pastel.foreground())));
}

#[test]
fn cache_directive_values() {
    assert_eq!(
        CacheDirective::for_determinism(true).header_value(),
        "public, max-age=31536000, immutable"
    );
    assert_eq!(CacheDirective::for_determinism(false).header_value(), "no-store");
}

#[test]
fn resize_only_when_shrinking() {
    assert!(!needs_resize((100, 150), dims(200, 300)));
    assert!(!needs_resize((100, 150), dims(100, 150)));
    assert!(needs_resize((100, 150), dims(99, 300)));
    assert!(needs_resize((100, 150), dims(200, 149)));
}

#[test]
fn contain_fit_pads_with_transparency() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(400, 200, Rgba([0, 0, 255, 255])));
    let fitted = contain_fit(&img, dims(100, 100));

    assert_eq!(fitted.dimensions(), (100, 100));
    assert_eq!(fitted.get_pixel(50, 5)[3], 0);
    assert_eq!(fitted.get_pixel(50, 95)[3], 0);
    assert_eq!(fitted.get_pixel(50, 50)[3], 255);
}

#[test]
fn process_cover_never_upscales() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "small.png", 120, 180);

    let artifact = processor::process_cover(
        &path,
        dims(600, 900),
        80,
        limits(),
        &CancellationToken::new(),
    )
    .unwrap();

    assert_eq!(artifact.kind, ImageKind::Webp);
    assert_eq!(artifact.cache, CacheDirective::Immutable);
    let decoded = image::load_from_memory(&artifact.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (120, 180));
}

#[test]
fn process_cover_shrinks_to_requested_box() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "large.png", 800, 1200);

    let artifact = processor::process_cover(
        &path,
        dims(200, 300),
        70,
        limits(),
        &CancellationToken::new(),
    )
    .unwrap();

    let decoded = image::load_from_memory(&artifact.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (200, 300));
}

#[test]
fn process_cover_reports_corrupt_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"\xFF\xD8\xFFnot really a jpeg").unwrap();

    let err = processor::process_cover(
        &path,
        dims(100, 100),
        80,
        limits(),
        &CancellationToken::new(),
    )
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn process_cover_enforces_decode_limits() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "wide.png", 300, 10);

    let tight = DecodeLimits {
        max_dimension: 200,
        max_alloc: 256 * 1024 * 1024,
    };
    let err = processor::process_cover(
        &path,
        dims(100, 100),
        80,
        tight,
        &CancellationToken::new(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Image(_)));
}

#[test]
fn process_cover_stops_when_cancelled() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "cover.png", 64, 64);

    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = processor::process_cover(&path, dims(32, 32), 80, limits(), &cancel).unwrap_err();
    assert!(matches!(err, AppError::Cancelled));
}

#[test]
fn root_resolves_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("series")).unwrap();
    write_png(&dir.path().join("series"), "a.png", 4, 4);

    let root = CoverRoot::open(dir.path()).unwrap();
    match root.resolve_sync(&["series", "a.png"]).unwrap() {
        Resolution::Found(path) => {
            assert!(path.starts_with(root.path()));
            assert!(path.ends_with("series/a.png"));
        }
        other => panic!("expected Found, got {other:?}"),
    }
}

#[test]
fn root_reports_missing_file_and_directories() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("series")).unwrap();

    let root = CoverRoot::open(dir.path()).unwrap();
    assert_eq!(
        root.resolve_sync(&["book-1.jpg"]).unwrap(),
        Resolution::Missing
    );
    assert_eq!(
        root.resolve_sync(&["nope", "deeper", "x.jpg"]).unwrap(),
        Resolution::Missing
    );
    assert_eq!(root.resolve_sync(&["series"]).unwrap(), Resolution::Missing);
    assert_eq!(
        root.resolve_sync::<&str>(&[]).unwrap(),
        Resolution::Missing
    );
}

#[test]
fn root_rejects_traversal_segments() {
    let parent = tempfile::tempdir().unwrap();
    let covers = parent.path().join("covers");
    std::fs::create_dir(&covers).unwrap();
    std::fs::write(parent.path().join("secret.jpg"), b"secret").unwrap();

    let root = CoverRoot::open(&covers).unwrap();
    for segments in [
        vec!["..", "secret.jpg"],
        vec!["..", "..", "secret.jpg"],
        vec!["..", "missing.jpg"],
        vec![".", "a.jpg"],
        vec!["a\\..\\b.jpg"],
    ] {
        assert_eq!(
            root.resolve_sync(&segments).unwrap(),
            Resolution::Invalid,
            "{segments:?}"
        );
    }
}

#[cfg(unix)]
#[test]
fn root_rejects_symlink_escapes() {
    let parent = tempfile::tempdir().unwrap();
    let covers = parent.path().join("covers");
    let outside = parent.path().join("outside");
    std::fs::create_dir(&covers).unwrap();
    std::fs::create_dir(&outside).unwrap();
    write_png(&outside, "secret.png", 4, 4);

    std::os::unix::fs::symlink(outside.join("secret.png"), covers.join("link.png")).unwrap();
    std::os::unix::fs::symlink(&outside, covers.join("elsewhere")).unwrap();
    std::os::unix::fs::symlink(covers.join("gone.png"), covers.join("dangling.png")).unwrap();

    let root = CoverRoot::open(&covers).unwrap();
    assert_eq!(root.resolve_sync(&["link.png"]).unwrap(), Resolution::Invalid);
    assert_eq!(
        root.resolve_sync(&["elsewhere", "secret.png"]).unwrap(),
        Resolution::Invalid
    );
    assert_eq!(
        root.resolve_sync(&["elsewhere", "unknown.png"]).unwrap(),
        Resolution::Invalid
    );
    assert_eq!(
        root.resolve_sync(&["dangling.png"]).unwrap(),
        Resolution::Invalid
    );
}

#[cfg(unix)]
#[test]
fn root_allows_symlinks_within_root() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "real.png", 4, 4);
    std::os::unix::fs::symlink(dir.path().join("real.png"), dir.path().join("alias.png")).unwrap();

    let root = CoverRoot::open(dir.path()).unwrap();
    assert!(matches!(
        root.resolve_sync(&["alias.png"]).unwrap(),
        Resolution::Found(_)
    ));
}

#[test]
fn root_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        CoverRoot::open(dir.path().join("absent")),
        Err(AppError::Config(_))
    ));
}

#[tokio::test]
async fn pipeline_falls_back_to_random_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = test_pipeline(dir.path(), true);

    let request = ImageRequest::parse("100", "100", "book-1.jpg", None, None, 80).unwrap();
    let artifact = pipeline.cover(request).await.unwrap();

    assert_eq!(artifact.kind, ImageKind::Png);
    assert_eq!(artifact.cache, CacheDirective::NoStore);
}

#[tokio::test]
async fn pipeline_rejects_escaping_path() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = test_pipeline(dir.path(), true);

    let request = ImageRequest::parse("100", "100", "../secret.jpg", None, None, 80).unwrap();
    let err = pipeline.cover(request).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidPath));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pipeline_shares_deterministic_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = test_pipeline(dir.path(), true);

    let request = || {
        ImageRequest::parse(
            "240",
            "360",
            "@placeholder",
            Some("book-042".to_string()),
            None,
            80,
        )
        .unwrap()
    };
    let a = pipeline.cover(request()).await.unwrap();
    let b = pipeline.cover(request()).await.unwrap();

    assert_eq!(a.bytes, b.bytes);
    assert_eq!(a.bytes.as_ptr(), b.bytes.as_ptr());
}

#[tokio::test]
async fn pipeline_without_cache_recomputes() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = test_pipeline(dir.path(), false);

    let request = || {
        ImageRequest::parse(
            "64",
            "64",
            "@placeholder",
            Some("book-7".to_string()),
            None,
            80,
        )
        .unwrap()
    };
    let a = pipeline.cover(request()).await.unwrap();
    let b = pipeline.cover(request()).await.unwrap();

    assert_eq!(a.bytes, b.bytes);
    assert_ne!(a.bytes.as_ptr(), b.bytes.as_ptr());
}

#[tokio::test]
async fn pipeline_surfaces_decode_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.png"), b"definitely not a png").unwrap();
    let pipeline = test_pipeline(dir.path(), true);

    let request = ImageRequest::parse("100", "100", "bad.png", None, None, 80).unwrap();
    let err = pipeline.cover(request).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.public_message(), "Image processing failed");
}

#[tokio::test]
async fn pipeline_gives_up_after_deadline() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "huge.png", 4000, 4000);

    let mut config = Config::default();
    config.cache.enabled = false;
    config.processing.timeout_ms = 1;
    let pipeline = pipeline_with(dir.path(), &config);

    let request = ImageRequest::parse("200", "300", "huge.png", None, None, 80).unwrap();
    let err = pipeline.cover(request).await.unwrap_err();
    assert!(matches!(err, AppError::Timeout));
    assert_eq!(err.public_message(), "Image processing timed out");
}

#[tokio::test]
async fn pipeline_waits_for_a_free_permit() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.cache.enabled = false;
    config.processing.max_concurrent = 1;
    let pipeline = pipeline_with(dir.path(), &config);

    let request = || {
        ImageRequest::parse("64", "64", "@placeholder", Some("b".to_string()), None, 80).unwrap()
    };

    let held = pipeline.permits.clone().acquire_owned().await.unwrap();
    let blocked =
        tokio::time::timeout(Duration::from_millis(50), pipeline.cover(request())).await;
    assert!(blocked.is_err(), "job ran without a permit");

    drop(held);
    let artifact = pipeline.cover(request()).await.unwrap();
    assert_eq!(artifact.kind, ImageKind::Png);
    assert_eq!(pipeline.permits.available_permits(), 1);
}

#[tokio::test]
async fn guarded_work_times_out_and_cancels() {
    let cancel = CancellationToken::new();
    let (release, wait) = mpsc::channel::<()>();

    let result = run_guarded(cancel.clone(), Duration::from_millis(10), move |_| {
        let _ = wait.recv();
        Ok(())
    })
    .await;

    assert!(matches!(result, Err(AppError::Timeout)));
    assert!(cancel.is_cancelled());
    release.send(()).unwrap();
}

#[tokio::test]
async fn dropping_guarded_work_cancels_token() {
    let cancel = CancellationToken::new();
    let (started_tx, started) = mpsc::channel::<()>();
    let (release, wait) = mpsc::channel::<()>();
    let (report, observed) = mpsc::channel::<bool>();

    let task = tokio::spawn(run_guarded(
        cancel.clone(),
        Duration::from_secs(30),
        move |token| {
            let _ = started_tx.send(());
            let _ = wait.recv();
            let _ = report.send(token.is_cancelled());
            Ok(())
        },
    ));

    tokio::task::spawn_blocking(move || started.recv().unwrap())
        .await
        .unwrap();
    assert!(!cancel.is_cancelled());

    // aborting drops the in-flight future
    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());
    assert!(cancel.is_cancelled());

    release.send(()).unwrap();
    let seen = tokio::task::spawn_blocking(move || observed.recv().unwrap())
        .await
        .unwrap();
    assert!(seen, "worker did not see cancellation");
}

#[tokio::test]
async fn guarded_work_skips_when_already_cancelled() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let result = run_guarded(cancel, Duration::from_secs(1), |_| Ok(1)).await;
    assert!(matches!(result, Err(AppError::Cancelled)));
}

#[test]
fn cover_ref_normalization() {
    assert_eq!(CoverRef::parse("@placeholder"), CoverRef::Placeholder);
    assert_eq!(CoverRef::parse("  "), CoverRef::Placeholder);
    assert_eq!(
        CoverRef::parse("/covers/series\\book 1.jpg"),
        CoverRef::Path(vec!["series".to_string(), "book 1.jpg".to_string()])
    );
    assert_eq!(
        CoverRef::parse("./a//b.png"),
        CoverRef::Path(vec!["a".to_string(), "b.png".to_string()])
    );
}

#[test]
fn cover_url_building() {
    assert_eq!(
        cover_url("book 42", &CoverRef::Placeholder, 240, 360),
        "/covers/240/360/@placeholder?bookId=book%2042"
    );
    assert_eq!(
        cover_url("b", &CoverRef::parse("series/book 1.jpg"), 100, 150),
        "/covers/100/150/series/book%201.jpg"
    );
}

#[test]
fn config_parse_toml() {
    let toml = r#"
[server]
bind = "127.0.0.1:9090"

[covers]
root = "/srv/covers"
default_quality = 65

[processing]
max_concurrent = 2
timeout_ms = 500

[cache]
enabled = false
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.server.bind.port(), 9090);
    assert_eq!(config.covers.root, std::path::PathBuf::from("/srv/covers"));
    assert_eq!(config.covers.default_quality, 65);
    assert_eq!(config.processing.max_concurrent, 2);
    assert_eq!(config.processing.timeout_ms, 500);
    assert_eq!(config.processing.max_source_dimension, 12_000);
    assert!(!config.cache.enabled);
    assert_eq!(config.cache.ttl_seconds, 600);
    assert!(config.fonts.dir.is_none());
}

#[test]
fn config_default_values() {
    let config = Config::default();
    assert_eq!(config.server.bind.port(), 8080);
    assert_eq!(config.covers.default_quality, DEFAULT_QUALITY);
    assert!(config.cache.enabled);
    assert!(config.processing.max_concurrent >= 1);
}

#[test]
fn generated_config_parses() {
    let config: Config = toml::from_str(&Config::generate_default()).unwrap();
    assert_eq!(config.covers.root, std::path::PathBuf::from("public/covers"));
}

#[test]
fn error_status_mapping() {
    assert_eq!(AppError::InvalidDimensions.status(), StatusCode::BAD_REQUEST);
    assert_eq!(AppError::InvalidPath.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        AppError::Timeout.status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    let shared = AppError::from(Arc::new(AppError::InvalidPath));
    assert_eq!(shared.status(), StatusCode::BAD_REQUEST);
    assert_eq!(shared.public_message(), "Invalid path");
}
