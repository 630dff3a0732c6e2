#![cfg(feature = "generator")]

use std::error::Error;
use std::path::{Path, PathBuf};

use cityflight_core::assets::BakedLayout;
use cityflight_core::scene::SceneConfig;
use d_gen_layout::preview::build_preview_image;
use d_gen_layout::sprite::{SPRITE_SIZE, build_drone_sprite};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("workspace root")
        .to_path_buf()
}

fn output_paths(root: &Path, file_name: &str) -> [PathBuf; 2] {
    [
        root.join("assets").join(file_name),
        root.join("web").join("assets").join(file_name),
    ]
}

fn ensure_parent(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let root = workspace_root();

    // A scene override next to the outputs takes precedence over the built-in scene.
    let scene_path = root.join("assets").join("scene.json");
    let scene = if scene_path.exists() {
        let raw = std::fs::read_to_string(&scene_path)?;
        SceneConfig::from_json(&raw)
            .map_err(|err| format!("{}: {err}", scene_path.display()))?
    } else {
        SceneConfig::default()
    };

    let layout = BakedLayout::bake(&scene);
    let json = layout.to_json()?;
    for path in output_paths(&root, "layout.json") {
        ensure_parent(&path)?;
        std::fs::write(&path, &json)?;
        println!("wrote {} ({} structures)", path.display(), layout.structures.len());
    }

    let preview = build_preview_image(&scene, &layout.structures);
    for path in output_paths(&root, "layout_preview.png") {
        ensure_parent(&path)?;
        preview.save(&path)?;
        println!("wrote {}", path.display());
    }

    let sprite = build_drone_sprite(SPRITE_SIZE);
    for path in output_paths(&root, "drone.png") {
        ensure_parent(&path)?;
        sprite.save(&path)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
