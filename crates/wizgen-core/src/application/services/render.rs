//! Tree rendering: materialize a template unit into the output filesystem.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::error::ApplicationError;
use crate::application::ports::Filesystem;
use crate::domain::context::RenderContext;
use crate::domain::template::{self, TemplateNode, TemplateTree};

/// Render `tree` under `output_root`.
///
/// Depth-first over an explicit worklist. Directories are created
/// idempotently; files carrying the template marker are substituted and
/// written under their stripped name, everything else is copied verbatim.
/// Never reads or deletes output state.
pub async fn render_tree(
    fs: &dyn Filesystem,
    tree: &TemplateTree,
    output_root: &Path,
    ctx: &RenderContext,
) -> Result<(), ApplicationError> {
    fs.create_dir_all(output_root).await?;

    let mut work: Vec<(PathBuf, &TemplateNode)> = tree
        .nodes
        .iter()
        .rev()
        .map(|node| (output_root.to_path_buf(), node))
        .collect();

    while let Some((dir, node)) = work.pop() {
        match node {
            TemplateNode::File { name, body } => {
                let target = dir.join(template::output_name(name));
                if template::is_templated(name) {
                    fs.write(&target, &ctx.render(body)).await?;
                } else {
                    fs.write(&target, body).await?;
                }
                debug!(path = %target.display(), "rendered file");
            }
            TemplateNode::Dir { name, children } => {
                let sub = dir.join(name);
                fs.create_dir_all(&sub).await?;
                for child in children.iter().rev() {
                    work.push((sub.clone(), child));
                }
            }
        }
    }

    Ok(())
}
