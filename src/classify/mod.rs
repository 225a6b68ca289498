use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    matched: Vec<Vec<String>>,
    unmatched: Vec<String>,
}

impl Buckets {
    pub fn matched(&self, idx: usize) -> &[String] {
        self.matched.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    pub fn take_matched(&mut self, idx: usize) -> Vec<String> {
        self.matched
            .get_mut(idx)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn n_keywords(&self) -> usize {
        self.matched.len()
    }

    /// Bucket `idx` where `idx == n_keywords()` addresses the unmatched bucket.
    pub fn bucket(&self, idx: usize) -> &[String] {
        if idx == self.matched.len() {
            &self.unmatched
        } else {
            self.matched(idx)
        }
    }
}

pub fn classify<S: AsRef<str>>(files: &[String], keywords: &[S]) -> Buckets {
    let mut matched: Vec<Vec<String>> = vec![Vec::new(); keywords.len()];
    let mut unmatched = Vec::new();

    for file in files {
        match keywords.iter().position(|kw| file.contains(kw.as_ref())) {
            Some(idx) => matched[idx].push(file.clone()),
            None => unmatched.push(file.clone()),
        }
    }

    for bucket in matched.iter_mut() {
        natural_sort(bucket);
    }
    natural_sort(&mut unmatched);

    Buckets { matched, unmatched }
}

pub fn natural_sort(files: &mut [String]) {
    files.sort_by(|a, b| natural_cmp(a, b));
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natord::compare(a, b)
}
