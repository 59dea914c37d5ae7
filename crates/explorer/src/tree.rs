// ABOUTME: Lazily-expanded problem tree: root groups, step and category listings, and problem leaves.
// ABOUTME: Listing resolution goes through the cache and turns scrape failures into empty listings.

use boj_scrape::{Client, Problem};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::cache::{ListingCache, ListingKey};
use crate::catalog::CategoryCatalog;
use crate::OPEN_PROBLEM_COMMAND;

/// Titles of the judge site's step-by-step course, step 1 first.
pub const STEP_TITLES: [&str; 31] = [
    "입출력과 사칙연산",
    "조건문",
    "반복문",
    "1차원 배열",
    "문자열",
    "심화 1",
    "2차원 배열",
    "일반 수학 1",
    "약수, 배수와 소수",
    "기하: 직사각형과 삼각형",
    "시간 복잡도",
    "브루트 포스",
    "정렬",
    "집합과 맵",
    "약수, 배수와 소수 2",
    "스택, 큐, 덱",
    "조합론",
    "심화 2",
    "재귀",
    "백트래킹",
    "동적 계획법 1",
    "누적 합",
    "그리디 알고리즘",
    "분할 정복",
    "이분 탐색",
    "우선순위 큐",
    "동적 계획법 2",
    "DFS와 BFS",
    "최단 경로",
    "투 포인터",
    "동적 계획법과 최단거리 역추적",
];

pub const STEP_GROUP_LABEL: &str = "단계별로 풀어보기";
pub const CATEGORY_GROUP_LABEL: &str = "알고리즘 분류";
pub const OPEN_PROBLEM_TITLE: &str = "문제 열기";

/// Top-level grouping under the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Group {
    ByStep,
    ByCategory,
}

/// What a node is; decided when the node is built, never re-derived from its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Root,
    Group(Group),
    Listing(ListingKey),
    Problem(Problem),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collapsibility {
    None,
    Collapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    Folder,
    File,
}

/// Command a host attaches to a leaf so that activating it opens the problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenCommand {
    pub command: String,
    pub title: String,
    pub problem_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    pub kind: NodeKind,
}

impl TreeNode {
    pub fn root() -> Self {
        Self {
            label: String::new(),
            kind: NodeKind::Root,
        }
    }

    pub fn group(group: Group) -> Self {
        let label = match group {
            Group::ByStep => STEP_GROUP_LABEL,
            Group::ByCategory => CATEGORY_GROUP_LABEL,
        };
        Self {
            label: label.to_string(),
            kind: NodeKind::Group(group),
        }
    }

    /// Step listing node labelled `"{n}. {title}"`.
    pub fn step(number: u32, title: &str) -> Self {
        Self {
            label: format!("{}. {}", number, title),
            kind: NodeKind::Listing(ListingKey::Step(number)),
        }
    }

    pub fn category(name: &str) -> Self {
        Self {
            label: name.to_string(),
            kind: NodeKind::Listing(ListingKey::Category(name.to_string())),
        }
    }

    pub fn leaf(problem: Problem) -> Self {
        Self {
            label: problem.label(),
            kind: NodeKind::Problem(problem),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Problem(_))
    }

    pub fn collapsible(&self) -> Collapsibility {
        if self.is_leaf() {
            Collapsibility::None
        } else {
            Collapsibility::Collapsed
        }
    }

    pub fn icon(&self) -> Icon {
        if self.is_leaf() {
            Icon::File
        } else {
            Icon::Folder
        }
    }

    /// The open command for leaves; `None` for every other node.
    pub fn open_command(&self) -> Option<OpenCommand> {
        match &self.kind {
            NodeKind::Problem(problem) => Some(OpenCommand {
                command: OPEN_PROBLEM_COMMAND.to_string(),
                title: OPEN_PROBLEM_TITLE.to_string(),
                problem_id: problem.id.clone(),
            }),
            _ => None,
        }
    }
}

/// Signals sent to tree subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    /// The whole tree is stale and should be re-read from the root.
    Refreshed,
}

/// Tree data source backed by the scraper and the listing cache.
#[derive(Debug)]
pub struct ProblemTree {
    client: Client,
    catalog: CategoryCatalog,
    cache: ListingCache,
    events: broadcast::Sender<TreeEvent>,
}

impl ProblemTree {
    pub fn new(client: Client) -> Self {
        Self::with_catalog(client, CategoryCatalog::builtin())
    }

    pub fn with_catalog(client: Client, catalog: CategoryCatalog) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            client,
            catalog,
            cache: ListingCache::new(),
            events,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn cache(&self) -> &ListingCache {
        &self.cache
    }

    /// Receive a [`TreeEvent`] each time the tree is refreshed.
    pub fn subscribe(&self) -> broadcast::Receiver<TreeEvent> {
        self.events.subscribe()
    }

    /// Children of `parent`; `None` means the root.
    pub async fn children(&self, parent: Option<&TreeNode>) -> Vec<TreeNode> {
        let kind = parent.map(|n| &n.kind).unwrap_or(&NodeKind::Root);
        match kind {
            NodeKind::Root => vec![
                TreeNode::group(Group::ByStep),
                TreeNode::group(Group::ByCategory),
            ],
            NodeKind::Group(Group::ByStep) => STEP_TITLES
                .iter()
                .zip(1u32..)
                .map(|(title, n)| TreeNode::step(n, title))
                .collect(),
            NodeKind::Group(Group::ByCategory) => {
                self.catalog.names().map(TreeNode::category).collect()
            }
            NodeKind::Listing(key) => self
                .problems(key)
                .await
                .into_iter()
                .map(TreeNode::leaf)
                .collect(),
            NodeKind::Problem(_) => Vec::new(),
        }
    }

    /// Problems of one listing, from cache when possible.
    ///
    /// Unknown categories and scrape failures both yield an empty list;
    /// neither is cached, so a later expansion tries again.
    pub async fn problems(&self, key: &ListingKey) -> Vec<Problem> {
        if let Some(hit) = self.cache.get(key) {
            debug!(%key, count = hit.len(), "listing cache hit");
            return hit;
        }
        debug!(%key, "listing cache miss");

        let fetched = match key {
            ListingKey::Step(step) => self.client.step_problems(*step).await,
            ListingKey::Category(name) => match self.catalog.resolve(name) {
                Some(id) => self.client.category_problems(id).await,
                None => {
                    debug!(category = %name, "unknown category");
                    return Vec::new();
                }
            },
        };

        match fetched {
            Ok(problems) => {
                self.cache.put(key.clone(), problems.clone());
                problems
            }
            Err(err) => {
                warn!(%key, error = %err, "failed to load listing");
                Vec::new()
            }
        }
    }

    /// Drop every cached listing and tell subscribers to re-read the tree.
    pub fn refresh(&self) {
        self.cache.clear();
        info!("problem tree refreshed");
        // No subscribers is fine.
        let _ = self.events.send(TreeEvent::Refreshed);
    }
}
