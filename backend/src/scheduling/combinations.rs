/// Every `k`-sized subset of `items`, each subset keeping the input order.
///
/// Subsets come out in lexicographic order of their indices. `k == 0` yields a
/// single empty subset and `k > items.len()` yields none.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    index_combinations(items.len(), k)
        .into_iter()
        .map(|indices| indices.into_iter().map(|i| items[i].clone()).collect())
        .collect()
}

/// Index form of [`combinations`] over `0..n`.
pub(crate) fn index_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k > n {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();

    loop {
        result.push(indices.clone());
        if !advance(&mut indices, n) {
            break;
        }
    }

    result
}

/// Step to the next index tuple, returning false once the last one is reached
fn advance(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();

    let Some(pos) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
        return false;
    };

    indices[pos] += 1;
    for i in (pos + 1)..k {
        indices[i] = indices[i - 1] + 1;
    }
    true
}
