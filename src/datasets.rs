//! Download and load the Facebook social network dataset from SNAP.
//!
//! Dataset: Facebook combined ego-networks
//! - Nodes: 4,039 (anonymized Facebook users)
//! - Edges: 88,234 (friendships)
//! - Source: <https://snap.stanford.edu/data/ego-Facebook.html>
//!
//! The dataset is cached on disk after the first download. Presence of
//! the cached files is the only validity signal: there is no checksum,
//! TTL, or refresh. Sync HTTP via ureq (no tokio needed).

use crate::MotifGraph;
use flate2::read::GzDecoder;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Fixed URL of the gzip-compressed edge list.
pub const FACEBOOK_DATASET_URL: &str = "https://snap.stanford.edu/data/facebook_combined.txt.gz";

/// Cache directory used by [`load_facebook_dataset`].
pub const DEFAULT_CACHE_DIR: &str = "./data";

const ARCHIVE_NAME: &str = "facebook_combined.txt.gz";
const EDGE_LIST_NAME: &str = "facebook_combined.txt";

/// Errors that can occur while fetching or parsing the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("download of {url} failed: {source}")]
    Download { url: String, source: ureq::Error },

    #[error("download of {url} failed: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid node id {token:?} on line {line}")]
    InvalidNodeId {
        token: String,
        line: usize,
        source: std::num::ParseIntError,
    },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Load the Facebook dataset using the default cache directory,
/// [`DEFAULT_CACHE_DIR`].
pub fn load_facebook_dataset() -> DatasetResult<MotifGraph> {
    load_facebook_dataset_from(Path::new(DEFAULT_CACHE_DIR))
}

/// Load the Facebook dataset, caching downloads under `cache_dir`.
///
/// Creates the cache directory if absent. If the decompressed edge
/// list is missing, downloads the archive (unless already cached) and
/// decompresses it. Then parses the edge list into a [`MotifGraph`]
/// whose node payloads are the dataset's integer user ids.
///
/// Any network, filesystem, or parse failure propagates; there is no
/// retry and no partial result.
pub fn load_facebook_dataset_from(cache_dir: &Path) -> DatasetResult<MotifGraph> {
    let cache_dir = ensure_cache_dir(cache_dir)?;
    let gz_path = cache_dir.join(ARCHIVE_NAME);
    let txt_path = cache_dir.join(EDGE_LIST_NAME);

    if txt_path.exists() {
        info!("using cached dataset at {}", txt_path.display());
    } else {
        if !gz_path.exists() {
            info!("downloading Facebook dataset from SNAP...");
            download_archive(FACEBOOK_DATASET_URL, &gz_path)?;
            info!("downloaded to {}", gz_path.display());
        }
        info!("decompressing...");
        decompress_archive(&gz_path, &txt_path)?;
        info!("extracted to {}", txt_path.display());
    }

    info!("loading graph...");
    let file = File::open(&txt_path)?;
    let graph = parse_edge_list(BufReader::new(file))?;
    info!(
        "loaded graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Ensure the cache directory exists.
pub fn ensure_cache_dir(dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // We surface status codes in our own error type
        .timeout_global(Some(std::time::Duration::from_secs(120)))
        .build()
        .new_agent()
}

/// GET `url` and stream the response body to `dest`.
fn download_archive(url: &str, dest: &Path) -> DatasetResult<()> {
    let agent = make_agent();

    let response = agent.get(url).call().map_err(|e| DatasetError::Download {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(DatasetError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let mut body = response.into_body().into_reader();
    let mut file = File::create(dest)?;
    io::copy(&mut body, &mut file)?;
    Ok(())
}

/// Decompress the gzip archive fully into memory, then write the edge
/// list file in a single pass.
fn decompress_archive(gz_path: &Path, txt_path: &Path) -> DatasetResult<()> {
    let mut decoder = GzDecoder::new(File::open(gz_path)?);
    let mut text = Vec::new();
    decoder.read_to_end(&mut text)?;
    fs::write(txt_path, text)?;
    Ok(())
}

/// Parse a whitespace-separated edge list into a graph.
///
/// Lines starting with `#` and lines that do not split into exactly
/// two tokens are skipped. Each token is an external node id; the
/// first sighting of an id inserts a node whose payload is the id's
/// integer value. Duplicate edges and self-loops are added as given.
pub fn parse_edge_list<R: BufRead>(reader: R) -> DatasetResult<MotifGraph> {
    let mut graph = MotifGraph::new_undirected();
    let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            continue;
        }

        let src = intern_node(&mut graph, &mut node_map, parts[0], idx + 1)?;
        let dst = intern_node(&mut graph, &mut node_map, parts[1], idx + 1)?;
        graph.add_edge(src, dst, ());
    }

    Ok(graph)
}

/// Map an external string id to its node handle, inserting on first
/// sight.
fn intern_node(
    graph: &mut MotifGraph,
    node_map: &mut HashMap<String, NodeIndex>,
    id: &str,
    line: usize,
) -> DatasetResult<NodeIndex> {
    if let Some(&ix) = node_map.get(id) {
        return Ok(ix);
    }

    let payload: u32 = id.parse().map_err(|source| DatasetError::InvalidNodeId {
        token: id.to_string(),
        line,
        source,
    })?;

    let ix = graph.add_node(payload);
    node_map.insert(id.to_string(), ix);
    Ok(ix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Cursor;

    fn payloads(graph: &MotifGraph) -> HashSet<u32> {
        graph.node_weights().copied().collect()
    }

    #[test]
    fn test_parse_small_edge_list() {
        let graph = parse_edge_list(Cursor::new("1 2\n2 3\n")).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(payloads(&graph), HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_comments_and_malformed_lines_are_skipped() {
        let input = "# facebook_combined\n# nodes: 3\n0 1\nnot-an-edge\n1 2 3\n\n1 2\n";
        let graph = parse_edge_list(Cursor::new(input)).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(payloads(&graph), HashSet::from([0, 1, 2]));
    }

    #[test]
    fn test_repeated_ids_reuse_the_same_node() {
        let graph = parse_edge_list(Cursor::new("5 6\n6 7\n7 5\n")).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_tab_separated_tokens_parse() {
        let graph = parse_edge_list(Cursor::new("0\t1\n")).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_edges_and_self_loops_are_kept() {
        let graph = parse_edge_list(Cursor::new("0 1\n0 1\n2 2\n")).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_non_integer_id_is_an_error() {
        let err = parse_edge_list(Cursor::new("0 1\nfoo bar\n")).unwrap_err();
        match err {
            DatasetError::InvalidNodeId { token, line, .. } => {
                assert_eq!(token, "foo");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ensure_cache_dir_creates_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/data");
        let created = ensure_cache_dir(&nested).unwrap();
        assert_eq!(created, nested);
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_cache_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        ensure_cache_dir(tmp.path()).unwrap();
        ensure_cache_dir(tmp.path()).unwrap();
    }
}
