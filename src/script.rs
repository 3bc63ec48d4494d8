use std::path::Path;

use crate::error::ScriptError;
pub use crate::kernel::scheduler::Turn;

/// Reads a JSON array of `{ "speaker": ..., "text": ... }` objects.
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<Turn>, ScriptError> {
    let raw = std::fs::read_to_string(path)?;
    parse_script(&raw)
}

pub fn parse_script(raw: &str) -> Result<Vec<Turn>, ScriptError> {
    Ok(serde_json::from_str(raw)?)
}

/// Built-in transcript used when no script is given.
pub fn demo_script() -> Vec<Turn> {
    vec![
        Turn::new(
            "Speaker 1",
            "Howdy, I'm Chris, an engineer on the AVFoundation team.",
        ),
        Turn::new(
            "Speaker 1",
            "I'd like to welcome you to our session on preparing and delivering streaming content for spatial experiences. To begin, we'll briefly review how to produce, prepare, and deliver 2D media using HTTP Live Streaming (HLS). With that foundation in place, we'll then look at 3D video content, what's currently supported and how to adapt the 2D workflow to accommodate these immersive experiences.",
        ),
        Turn::new(
            "Speaker 2",
            "When considering the content pipeline, we start with encoding video, audio, and captions. Next, those encoded resources need to be packaged, ready for HLS delivery. This is the same approach used to deliver 2D content today, and our goal is to build upon these familiar processes for 3D.",
        ),
        Turn::new(
            "Speaker 2",
            "One key update here is HLS support for fragmented MP4 timed metadata, which enables an important new level of adaptation for spatial experiences.",
        ),
        Turn::new(
            "Speaker 1",
            "For more details, see the HTTP Live Streaming page on the Apple Developer website. It provides links to documentation, tools, example streams, developer forums, and other resources relevant to preparing and delivering HLS content. This same pipeline and knowledge base apply to delivering audiovisual media across Apple platforms, now extended to support a new spatial paradigm.",
        ),
    ]
}
