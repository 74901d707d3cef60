use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FsError {
    #[error("no such node: {0}")]
    NotFound(String),

    #[error("not a folder: {0}")]
    NotAFolder(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),
}

/// One node in the simulated tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder { name: String, children: Vec<Node> },
    File { name: String, contents: String },
}

impl Node {
    pub fn folder(name: impl Into<String>) -> Self {
        Node::Folder {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn file(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Node::File {
            name: name.into(),
            contents: contents.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Folder { name, .. } | Node::File { name, .. } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }

    fn set_name(&mut self, new_name: &str) {
        match self {
            Node::Folder { name, .. } | Node::File { name, .. } => *name = new_name.to_string(),
        }
    }

    fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Folder { children, .. } => children.iter().find(|c| c.name() == name),
            Node::File { .. } => None,
        }
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        match self {
            Node::Folder { children, .. } => children.iter_mut().find(|c| c.name() == name),
            Node::File { .. } => None,
        }
    }
}

/// The whole tree. The root is an unnamed folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSystem {
    root: Node,
}

impl Default for FileSystem {
    fn default() -> Self {
        Self {
            root: Node::Folder {
                name: String::new(),
                children: vec![
                    Node::folder("Documents"),
                    Node::folder("Pictures"),
                    Node::folder("Music"),
                    Node::file("readme.txt", "Welcome to Aurora."),
                ],
            },
        }
    }
}

impl FileSystem {
    /// An empty tree (no default folders).
    pub fn empty() -> Self {
        Self {
            root: Node::Folder {
                name: String::new(),
                children: Vec::new(),
            },
        }
    }

    /// Resolve a path of segment names. The empty path is the root.
    pub fn node(&self, path: &[&str]) -> Option<&Node> {
        let mut current = &self.root;
        for segment in path {
            current = current.child(segment)?;
        }
        Some(current)
    }

    fn folder_mut(&mut self, path: &[&str]) -> Result<&mut Vec<Node>, FsError> {
        let mut current = &mut self.root;
        for segment in path {
            current = current
                .child_mut(segment)
                .ok_or_else(|| FsError::NotFound(segment.to_string()))?;
        }
        match current {
            Node::Folder { children, .. } => Ok(children),
            Node::File { name, .. } => Err(FsError::NotAFolder(name.clone())),
        }
    }

    /// Names of a folder's entries, in stored order.
    pub fn list(&self, path: &[&str]) -> Result<Vec<String>, FsError> {
        match self.node(path) {
            Some(Node::Folder { children, .. }) => {
                Ok(children.iter().map(|c| c.name().to_string()).collect())
            }
            Some(Node::File { name, .. }) => Err(FsError::NotAFolder(name.clone())),
            None => Err(FsError::NotFound(path.join("/"))),
        }
    }

    pub fn create_folder(&mut self, parent: &[&str], name: &str) -> Result<(), FsError> {
        self.insert(parent, Node::folder(name))
    }

    pub fn create_file(
        &mut self,
        parent: &[&str],
        name: &str,
        contents: &str,
    ) -> Result<(), FsError> {
        self.insert(parent, Node::file(name, contents))
    }

    fn insert(&mut self, parent: &[&str], node: Node) -> Result<(), FsError> {
        let children = self.folder_mut(parent)?;
        if children.iter().any(|c| c.name() == node.name()) {
            return Err(FsError::AlreadyExists(node.name().to_string()));
        }
        children.push(node);
        Ok(())
    }

    /// Remove the node at `path`. The root itself cannot be removed.
    pub fn remove(&mut self, path: &[&str]) -> Result<(), FsError> {
        let (name, parent) = match path.split_last() {
            Some(split) => split,
            None => return Err(FsError::NotFound(String::new())),
        };
        let children = self.folder_mut(parent)?;
        let before = children.len();
        children.retain(|c| c.name() != *name);
        if children.len() == before {
            return Err(FsError::NotFound(name.to_string()));
        }
        Ok(())
    }

    pub fn rename(&mut self, path: &[&str], new_name: &str) -> Result<(), FsError> {
        let (name, parent) = match path.split_last() {
            Some(split) => split,
            None => return Err(FsError::NotFound(String::new())),
        };
        let children = self.folder_mut(parent)?;
        if children.iter().any(|c| c.name() == new_name) {
            return Err(FsError::AlreadyExists(new_name.to_string()));
        }
        let node = children
            .iter_mut()
            .find(|c| c.name() == *name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        node.set_name(new_name);
        Ok(())
    }
}
