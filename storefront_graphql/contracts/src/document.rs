/// A named, reusable selection of fields on a GraphQL type.
#[derive(Debug, PartialEq, Eq)]
pub struct Fragment {
    pub name: &'static str,
    /// The full `fragment ... on ... { ... }` definition.
    pub source: &'static str,
    /// Fragments spread inside this fragment.
    pub fragments: &'static [&'static Fragment],
}

/// A GraphQL operation together with the fragments it spreads.
#[derive(Debug, PartialEq, Eq)]
pub struct Document {
    pub operation_name: &'static str,
    pub source: &'static str,
    pub fragments: &'static [&'static Fragment],
}

impl Fragment {
    /// The spread expression to embed this fragment in a selection set.
    pub fn spread(&self) -> String {
        format!("...{}", self.name)
    }
}

impl Document {
    /// Render the operation followed by every fragment definition it depends
    /// on, each exactly once.
    pub fn render(&self) -> String {
        let mut seen = Vec::new();
        collect_fragments(self.fragments, &mut seen);

        let mut out = self.source.trim().to_owned();
        for fragment in seen {
            out.push_str("\n\n");
            out.push_str(fragment.source.trim());
        }
        out
    }
}

fn collect_fragments(fragments: &[&'static Fragment], seen: &mut Vec<&'static Fragment>) {
    for &fragment in fragments {
        if seen.iter().any(|x| x.name == fragment.name) {
            continue;
        }
        seen.push(fragment);
        collect_fragments(fragment.fragments, seen);
    }
}
