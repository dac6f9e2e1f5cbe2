use std::hash::Hash;

pub trait Identifiable {
    type Id: Eq + Hash;

    fn id(&self) -> &Self::Id;
}

#[cfg(test)]
mod tests {
    use super::Identifiable;
    use crate::IdentifiedValue;

    use std::collections::HashMap;

    fn key_by_id<T: Identifiable>(items: Vec<T>) -> HashMap<T::Id, T>
    where
        T::Id: Clone,
    {
        items.into_iter().map(|item| (item.id().clone(), item)).collect()
    }

    #[test]
    fn test_equal_values_keep_distinct_identities() {
        let items = vec![
            IdentifiedValue::new("same", 1u32),
            IdentifiedValue::new("same", 2u32),
            IdentifiedValue::new("other", 3u32),
        ];
        // all three compare by value, but none of them collide by id
        assert_eq!(items[0], items[1]);

        let keyed = key_by_id(items);
        assert_eq!(keyed.len(), 3);
        assert_eq!(keyed[&2u32].value, "same");
        assert_eq!(keyed[&3u32].value, "other");
    }

    #[test]
    fn test_trait_id_matches_inherent_id() {
        let wrapped = IdentifiedValue::new(vec![1, 2, 3], "list".to_string());
        assert_eq!(Identifiable::id(&wrapped), wrapped.id());
    }
}
