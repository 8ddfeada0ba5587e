use clap::Parser;
use prismatic_mesh::MeshBuffers;

mod cli;
mod demo;

fn summarize(mesh: &MeshBuffers) {
    tracing::info!(
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        normals_synthesized = mesh.normals_synthesized,
        colors = mesh.colors.is_some(),
        uv_sets = mesh.uv_sets.iter().filter(|s| s.is_some()).count(),
        "mesh"
    );
    for submesh in &mesh.submeshes {
        tracing::info!(
            material = submesh.material.as_str(),
            triangles = submesh.triangle_count(),
            "submesh"
        );
    }
    if let Some(bounds) = &mesh.bounds {
        tracing::info!(mins = %bounds.mins, maxs = %bounds.maxs, "bounds");
    }
}

pub fn main() -> Result<(), prismatic::Error> {
    let args = cli::Cli::parse();
    cli::initialize_tracing(&args.log_filter, args.log_format);
    tracing::debug!("{args:#?}");

    let options = args.options()?;
    let doc = demo::grid(
        &demo::GridShape {
            columns: args.columns,
            rows: args.rows,
            materials: args.materials.clone(),
            color: args.color,
            alpha: args.alpha,
            uv: args.uv,
            primitive_normals: args.primitive_normals,
        },
        &options.channels,
    )?;
    tracing::info!(
        points = doc.point_count(),
        vertices = doc.vertex_count(),
        primitives = doc.primitive_count(),
        attributes = doc.attributes().len(),
        groups = doc.groups().len(),
        "built document"
    );

    let assembly = prismatic::assemble(&doc, &options)?;
    if let Some(software) = &assembly.info.software {
        tracing::info!(software = software.as_str(), "source");
    }
    summarize(&assembly.mesh);
    if !assembly.diagnostics.is_empty() {
        tracing::info!(count = assembly.diagnostics.len(), "recovered from diagnostics");
    }

    Ok(())
}
