// Word-cloud image output.

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::info;

use super::{image_path, layout_path, write_file};
use crate::cloud::layout::CloudLayout;
use crate::cloud::render;
use crate::error::Result;
use crate::frequency::table::FrequencyTable;

/// Files produced by one word-cloud render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudArtifacts {
    pub image: PathBuf,
    pub layout: Option<PathBuf>,
    pub words_drawn: usize,
}

/// Lay out the top `count` words, rasterize them, and write `<name>.png`.
/// With `dump_layout`, the draw instructions are also written as JSON.
pub fn write_cloud(
    table: &FrequencyTable,
    count: usize,
    layout: &CloudLayout,
    dir: &Path,
    name: &str,
    dump_layout: bool,
) -> Result<CloudArtifacts> {
    write_cloud_with_rng(table, count, layout, dir, name, dump_layout, &mut rand::rng())
}

/// Same as [`write_cloud`] with a caller-supplied random source for styling.
pub fn write_cloud_with_rng<R: Rng + ?Sized>(
    table: &FrequencyTable,
    count: usize,
    layout: &CloudLayout,
    dir: &Path,
    name: &str,
    dump_layout: bool,
    rng: &mut R,
) -> Result<CloudArtifacts> {
    let instructions = layout.render(table, count, rng)?;
    let png = render::render_png(layout.width, layout.height, &instructions)?;

    let image = image_path(dir, name);
    write_file(&image, &png)?;

    let layout_file = if dump_layout {
        let path = layout_path(dir, name);
        let json = serde_json::to_vec_pretty(&instructions)?;
        write_file(&path, &json)?;
        Some(path)
    } else {
        None
    };

    info!(
        path = %image.display(),
        words = instructions.len(),
        width = layout.width,
        height = layout.height,
        "Wrote word cloud"
    );

    Ok(CloudArtifacts {
        image,
        layout: layout_file,
        words_drawn: instructions.len(),
    })
}
