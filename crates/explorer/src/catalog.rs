// ABOUTME: Fixed table mapping algorithm category display names to judge-site category ids.
// ABOUTME: Resolution misses are ordinary outcomes, not errors.

/// Built-in categories in display order.
const BUILTIN_CATEGORIES: &[(&str, u32)] = &[
    ("구현", 102),
    ("다이나믹 프로그래밍", 25),
    ("그래프 이론", 7),
    ("자료 구조", 175),
    ("문자열", 158),
    ("그리디 알고리즘", 33),
    ("브루트포스 알고리즘", 125),
    ("수학", 124),
    ("정렬", 97),
    ("이분 탐색", 12),
    ("기하학", 100),
    ("정수론", 95),
    ("트리", 120),
    ("사칙연산", 699),
    ("시뮬레이션", 141),
    ("DFS", 127),
    ("BFS", 126),
    ("백트래킹", 5),
    ("분할 정복", 24),
    ("스택", 71),
    ("큐", 72),
    ("우선순위 큐", 59),
    ("해시를 사용한 집합과 맵", 136),
];

/// Ordered set of `(display name, category id)` pairs.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    entries: Vec<(String, u32)>,
}

impl CategoryCatalog {
    /// The judge site's category table.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_CATEGORIES
                .iter()
                .map(|(name, id)| (name.to_string(), *id)),
        )
    }

    /// Build a catalog from arbitrary entries. Later duplicates of a name are ignored.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut out: Vec<(String, u32)> = Vec::new();
        for (name, id) in entries {
            if !out.iter().any(|(n, _)| *n == name) {
                out.push((name, id));
            }
        }
        Self { entries: out }
    }

    /// Category id for `name`, or `None` when the name is not in the table.
    pub fn resolve(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| *id)
    }

    /// Display names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
