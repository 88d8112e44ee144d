
pub use mock_build_tree::MockBuildTree;
