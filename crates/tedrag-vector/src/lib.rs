//! tedrag Vector - External embedding and similarity-search clients
//!
//! Both collaborators are remote HTTP services: the hosted model gateway
//! produces question embeddings, and the managed vector index answers top-K
//! queries over the stored transcript passages.

pub mod embedding;
pub mod pinecone;

pub use embedding::LlmodEmbeddings;
pub use pinecone::PineconeIndex;
