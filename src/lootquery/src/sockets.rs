//! Socket link counting.
//!
//! The query engine only needs one number from an item's sockets: the size
//! of the largest contiguous linked group. The contract is a narrow trait so
//! tests and embedders can substitute their own counting.

use crate::item::ItemSocket;

/// Computes the size of the largest contiguous linked socket group.
pub trait LinkCounter {
    fn link_count(&self, sockets: &[ItemSocket]) -> usize;
}

/// Bundled link counting over the ordered socket sequence.
///
/// A group is a maximal run of consecutive sockets sharing one link-group
/// identifier. Sockets without an identifier never join a run; a grouped
/// socket with no same-group neighbor counts as a run of one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocketLinkService;

impl LinkCounter for SocketLinkService {
    fn link_count(&self, sockets: &[ItemSocket]) -> usize {
        let mut best = 0;
        let mut run = 0;
        let mut current = None;
        for socket in sockets {
            match socket.linked {
                Some(group) if current == Some(group) => run += 1,
                Some(group) => {
                    current = Some(group);
                    run = 1;
                }
                None => {
                    current = None;
                    run = 0;
                }
            }
            best = best.max(run);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::SocketColor;

    fn socket(linked: Option<u8>) -> ItemSocket {
        ItemSocket {
            color: Some(SocketColor::Red),
            linked,
        }
    }

    #[test]
    fn test_empty_sockets() {
        assert_eq!(SocketLinkService.link_count(&[]), 0);
    }

    #[test]
    fn test_no_links() {
        let sockets = vec![socket(None), socket(None), socket(None)];
        assert_eq!(SocketLinkService.link_count(&sockets), 0);
    }

    #[test]
    fn test_lone_grouped_socket() {
        let sockets = vec![socket(None), socket(Some(1)), socket(None)];
        assert_eq!(SocketLinkService.link_count(&sockets), 1);
    }

    #[test]
    fn test_largest_of_two_groups() {
        let sockets = vec![
            socket(Some(0)),
            socket(Some(0)),
            socket(Some(1)),
            socket(Some(1)),
            socket(Some(1)),
        ];
        assert_eq!(SocketLinkService.link_count(&sockets), 3);
    }

    #[test]
    fn test_ungrouped_socket_breaks_run() {
        let sockets = vec![
            socket(Some(0)),
            socket(Some(0)),
            socket(None),
            socket(Some(0)),
        ];
        assert_eq!(SocketLinkService.link_count(&sockets), 2);
    }

    #[test]
    fn test_fully_linked_six() {
        let sockets = vec![socket(Some(0)); 6];
        assert_eq!(SocketLinkService.link_count(&sockets), 6);
    }
}
