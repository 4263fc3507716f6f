// [tests/mirror/libs/infra/resilience/cache_invariants.test.rs]
/**
 * =================================================================
 * APARATO: CACHE INVARIANTS MIRROR TEST (V3.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L3-RESILIENCE)
 * OBJETIVO: Certificar el escenario canónico LRU de capacidad 2 y la
 *          disciplina de tamaño bajo sobrescritura.
 * =================================================================
 */

use panoptes_infra_resilience::MemoryCache;
use std::time::Duration;

/**
 * CERTIFICACIÓN: set a, set b, get a, set c ->
 * get(b)=None, get(a)="1", get(c)="3".
 */
#[test]
fn certify_canonical_capacity_two_scenario() {
    let cache: MemoryCache<&str, String> = MemoryCache::new(2, Duration::from_secs(600));

    cache.set("a", "1".to_string());
    cache.set("b", "2".to_string());
    assert_eq!(cache.get(&"a"), Some("1".to_string()));

    cache.set("c", "3".to_string());

    assert_eq!(cache.get(&"b"), None, "LRU 'b' must be evicted");
    assert_eq!(cache.get(&"a"), Some("1".to_string()));
    assert_eq!(cache.get(&"c"), Some("3".to_string()));

    println!("✅ CACHE: Canonical capacity-2 scenario certified.");
}

/**
 * CERTIFICACIÓN: size <= max_entries tras cualquier ráfaga de sets;
 * la sobrescritura jamás hace crecer el tamaño.
 */
#[test]
fn certify_size_discipline() {
    let cache: MemoryCache<u32, u32> = MemoryCache::new(4, Duration::from_secs(600));

    for key in 0..64u32 {
        cache.set(key % 8, key);
        assert!(cache.len() <= 4, "SIZE_BREACH at key {}", key);
    }

    let size_before = cache.len();
    cache.set(0, 999);
    cache.set(0, 1_000);
    assert_eq!(cache.len(), size_before, "overwrite must never grow the cache");

    println!("✅ CACHE: Size discipline certified.");
}
