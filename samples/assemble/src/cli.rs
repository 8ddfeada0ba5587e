use prismatic::{
    config::DEFAULT_VERTEX_BUDGET, mesh::MeshError, AssemblyOptions, ChannelNames, EmptyGeometry,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,prismatic=info,assemble=info",
        env = "PRISMATIC_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Number of quads along X
    #[arg(long, default_value_t = 4)]
    pub columns: u32,
    /// Number of quads along Z
    #[arg(long, default_value_t = 4)]
    pub rows: u32,
    /// Materials assigned to successive quads; comma-separated. Empty leaves materials unauthored.
    #[arg(short, long, default_value = "wood,stone", value_delimiter = ',')]
    pub materials: Vec<String>,
    /// Author a per-point colour gradient
    #[arg(long)]
    pub color: bool,
    /// Author per-point alpha
    #[arg(long)]
    pub alpha: bool,
    /// Author per-vertex texture coordinates
    #[arg(long)]
    pub uv: bool,
    /// Author one normal per primitive instead of letting them be synthesized
    #[arg(long)]
    pub primitive_normals: bool,

    /// Keep source triangle order instead of reversing it
    #[arg(long, env = "PRISMATIC_REVERSE_WINDING")]
    pub reverse_winding: bool,
    /// Maximum number of flattened vertices
    #[arg(long, default_value_t = DEFAULT_VERTEX_BUDGET, env = "PRISMATIC_VERTEX_BUDGET")]
    pub vertex_budget: usize,
    /// Produce an empty mesh instead of failing when there are no polygons
    #[arg(long)]
    pub allow_empty: bool,

    /// Position attribute name
    #[arg(long, default_value = "P")]
    pub position_attr: String,
    /// Normal attribute name
    #[arg(long, default_value = "N")]
    pub normal_attr: String,
    /// Colour attribute name
    #[arg(long, default_value = "Cd")]
    pub color_attr: String,
    /// Alpha attribute name
    #[arg(long, default_value = "Alpha")]
    pub alpha_attr: String,
    /// Material attribute name
    #[arg(long, default_value = "shop_materialpath")]
    pub material_attr: String,
    /// First texture coordinate set attribute name
    #[arg(long, default_value = "uv")]
    pub uv_attr: String,
}

impl Cli {
    pub fn channel_names(&self) -> Result<ChannelNames, MeshError> {
        ChannelNames::default()
            .with_position(&self.position_attr)
            .with_normal(&self.normal_attr)
            .with_color(&self.color_attr)
            .with_alpha(&self.alpha_attr)
            .with_material(&self.material_attr)
            .with_uv(1, &self.uv_attr)
    }

    pub fn options(&self) -> Result<AssemblyOptions, MeshError> {
        Ok(AssemblyOptions::default()
            .with_channels(self.channel_names()?)
            .with_reverse_winding(self.reverse_winding)
            .with_vertex_budget(self.vertex_budget)
            .with_empty_geometry(if self.allow_empty {
                EmptyGeometry::Empty
            } else {
                EmptyGeometry::Fail
            }))
    }
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
