// vidfetch-core/tests/probe_tests.rs

use serde_json::json;
use vidfetch_core::VideoMetadata;

fn full_fixture() -> serde_json::Value {
    // Shape matches `ffprobe -print_format json -show_format -show_streams`:
    // numeric format fields arrive as strings.
    json!({
        "streams": [
            {
                "index": 0,
                "codec_type": "video",
                "codec_name": "h264",
                "width": 1920,
                "height": 1080,
                "r_frame_rate": "30000/1001"
            },
            {
                "index": 1,
                "codec_type": "audio",
                "codec_name": "aac",
                "channels": 2,
                "sample_rate": "48000"
            }
        ],
        "format": {
            "format_name": "mov,mp4,m4a,3gp,3g2,mj2",
            "duration": "10.500000",
            "size": "1048576",
            "bit_rate": "800000"
        }
    })
}

#[test]
fn test_from_json_extracts_all_fields() {
    let info = VideoMetadata::from_json("sample.mp4".to_string(), 0, &full_fixture());

    assert_eq!(info.filename, "sample.mp4");
    assert_eq!(info.file_size, 1048576); // Declared format size wins
    assert_eq!(info.duration, Some(10.5));
    assert_eq!(info.format_name.as_deref(), Some("mov,mp4,m4a,3gp,3g2,mj2"));
    assert_eq!(info.bitrate, Some(800000));
    assert_eq!(info.resolution(), Some((1920, 1080)));
    assert_eq!(info.video_codec.as_deref(), Some("h264"));
    assert_eq!(info.frame_rate.as_deref(), Some("30000/1001"));
    assert_eq!(info.audio_codec.as_deref(), Some("aac"));
    assert_eq!(info.audio_channels, Some(2));
    assert_eq!(info.sample_rate, Some(48000));
}

#[test]
fn test_first_stream_of_each_kind_is_selected() {
    let fixture = json!({
        "streams": [
            { "codec_type": "audio", "codec_name": "opus", "channels": 6, "sample_rate": "44100" },
            { "codec_type": "video", "codec_name": "vp9", "width": 640, "height": 360, "r_frame_rate": "24/1" },
            { "codec_type": "video", "codec_name": "h264", "width": 1920, "height": 1080, "r_frame_rate": "60/1" },
            { "codec_type": "audio", "codec_name": "aac", "channels": 2, "sample_rate": "48000" }
        ],
        "format": { "duration": "5.0" }
    });

    let info = VideoMetadata::from_json("multi.mkv".to_string(), 42, &fixture);

    // First video stream and first audio stream in output order win.
    assert_eq!(info.video_codec.as_deref(), Some("vp9"));
    assert_eq!(info.resolution(), Some((640, 360)));
    assert_eq!(info.audio_codec.as_deref(), Some("opus"));
    assert_eq!(info.audio_channels, Some(6));
}

#[test]
fn test_missing_audio_stream_leaves_audio_fields_unset() {
    let fixture = json!({
        "streams": [
            { "codec_type": "video", "codec_name": "h264", "width": 1280, "height": 720, "r_frame_rate": "25/1" }
        ],
        "format": { "duration": "3.0", "size": "2048" }
    });

    let info = VideoMetadata::from_json("silent.mp4".to_string(), 0, &fixture);

    assert!(info.audio_codec.is_none());
    assert!(info.audio_channels.is_none());
    assert!(info.sample_rate.is_none());
    assert_eq!(info.video_codec.as_deref(), Some("h264"));
}

#[test]
fn test_missing_video_stream_leaves_video_fields_unset() {
    let fixture = json!({
        "streams": [
            { "codec_type": "audio", "codec_name": "mp3", "channels": 2, "sample_rate": "44100" }
        ],
        "format": { "duration": "180.0" }
    });

    let info = VideoMetadata::from_json("audio_only.mp4".to_string(), 99, &fixture);

    assert!(info.resolution().is_none());
    assert!(info.video_codec.is_none());
    assert!(info.frame_rate.is_none());
    assert_eq!(info.audio_codec.as_deref(), Some("mp3"));
    assert_eq!(info.file_size, 99); // No declared size, fallback survives
}

#[test]
fn test_empty_output_keeps_fallback_size() {
    let info = VideoMetadata::from_json("odd.mp4".to_string(), 7, &json!({}));

    assert_eq!(info.filename, "odd.mp4");
    assert_eq!(info.file_size, 7);
    assert!(info.duration.is_none());
    assert!(info.format_name.is_none());
}

#[test]
fn test_basic_record_has_only_filename_and_size() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("clip.mp4");
    std::fs::write(&path, b"0123456789")?;

    let info = VideoMetadata::basic(&path)?;

    let expected = VideoMetadata {
        filename: "clip.mp4".to_string(),
        file_size: 10,
        ..VideoMetadata::default()
    };
    assert_eq!(info, expected);

    Ok(())
}

#[test]
fn test_basic_record_missing_file_is_an_error() {
    let result = VideoMetadata::basic(std::path::Path::new("surely/not/here.mp4"));
    assert!(result.is_err());
}
