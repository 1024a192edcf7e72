use std::path::{Path, PathBuf};

use handoff::{Bitmap, Fps, PhotoApp, PhotoLibrary, Rect, TransitionOptions, TransitionTiming};

fn save(frame: &Bitmap, path: &Path) -> anyhow::Result<()> {
    let Some(img) = frame.to_rgba_image() else {
        anyhow::bail!("frame buffer does not match its size");
    };
    img.save(path)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let out = PathBuf::from("target").join("demos");
    std::fs::create_dir_all(&out)?;

    let library = PhotoLibrary::numbered(PhotoLibrary::DEFAULT_COUNT, 300, 200);
    let screen = Rect::new(0.0, 0.0, 320.0, 480.0);
    let mut app = PhotoApp::new(library, screen, TransitionTiming::default())?;
    let opts = TransitionOptions {
        fps: Fps::new(30, 1)?,
        cancel: false,
    };

    // Keep every eighth frame of each direction.
    let mut kept = Vec::new();
    let report = app.present(5, opts, |idx, host| {
        if idx.0 % 8 == 0 {
            kept.push((format!("present_{:02}.png", idx.0), host.render_frame()?));
        }
        Ok(())
    })?;
    println!("present: {}", serde_json::to_string(&report)?);

    if let Some(viewer) = app.viewer() {
        viewer.show_page(8)?;
    }
    let report = app.dismiss(opts, |idx, host| {
        if idx.0 % 8 == 0 {
            kept.push((format!("dismiss_{:02}.png", idx.0), host.render_frame()?));
        }
        Ok(())
    })?;
    println!("dismiss: {}", serde_json::to_string(&report)?);

    for (name, frame) in &kept {
        save(frame, &out.join(name))?;
    }
    Ok(())
}
