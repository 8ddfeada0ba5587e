use crate::VertexChannel;

/// Errors related to [MeshBuffers](crate::MeshBuffers).
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("Triangle index out of range: (0..{len}) ∌ {index}")]
    IndexOutOfRange { index: u32, len: usize },
    #[error("Texture coordinate set out of range: (1..={max}) ∌ {set}")]
    NoSuchUvSet { set: usize, max: usize },
    #[error("Channel {channel} has {len} elements, but the mesh has {expected} vertices")]
    ChannelLength {
        channel: VertexChannel,
        len: usize,
        expected: usize,
    },
}
