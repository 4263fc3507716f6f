// [libs/infra/resilience/src/cache.rs]
/*!
 * =================================================================
 * APARATO: MEMORY CACHE LRU+TTL (V11.0 - LAZY EXPIRY)
 * CLASIFICACIÓN: INFRASTRUCTURE (ESTRATO L3)
 * RESPONSABILIDAD: MAPA ACOTADO CON EXPIRACIÓN ABSOLUTA POR ENTRADA
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. LAZY EXPIRY: No existe hilo de barrido; una entrada vencida se
 *    purga en el 'get' que la descubre.
 * 2. LRU PROMOTION: Todo acierto promueve la entrada a más reciente;
 *    la inserción sobre capacidad desaloja la menos reciente.
 * 3. SIZE DISCIPLINE: size <= max_entries en todo momento; la
 *    sobrescritura de una clave existente jamás altera el tamaño.
 * =================================================================
 */

use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheSlot<V> {
    value: V,
    expires_at: Instant,
}

/// Caché LRU con TTL absoluto por entrada, protegido por un único cerrojo.
#[derive(Debug)]
pub struct MemoryCache<K: Hash + Eq, V: Clone> {
    slots: Mutex<LruCache<K, CacheSlot<V>>>,
    time_to_live: Duration,
}

impl<K: Hash + Eq, V: Clone> MemoryCache<K, V> {
    /// Construye el caché con capacidad máxima y TTL uniformes.
    #[must_use]
    pub fn new(max_entries: usize, time_to_live: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_entries.max(1))
            .expect("CACHE_CAPACITY_VOID: max_entries floors at 1");
        Self {
            slots: Mutex::new(LruCache::new(capacity)),
            time_to_live,
        }
    }

    /**
     * Recupera el valor vigente para la clave.
     * Acierta -> promoción LRU y copia del valor. Entrada vencida ->
     * purga perezosa y None. Ausente -> None.
     */
    pub fn get(&self, key: &K) -> Option<V> {
        let mut slots_guard = self.slots.lock().expect("CACHE_LOCK_POISONED");

        let is_expired = match slots_guard.get(key) {
            Some(slot) => slot.expires_at <= Instant::now(),
            None => return None,
        };

        if is_expired {
            slots_guard.pop(key);
            return None;
        }

        slots_guard.get(key).map(|slot| slot.value.clone())
    }

    /**
     * Inserta o sobrescribe el valor para la clave.
     * Sobre capacidad, la entrada menos recientemente usada es desalojada.
     */
    pub fn set(&self, key: K, value: V) {
        let mut slots_guard = self.slots.lock().expect("CACHE_LOCK_POISONED");
        slots_guard.put(
            key,
            CacheSlot { value, expires_at: Instant::now() + self.time_to_live },
        );
    }

    /// Elimina la entrada de la clave, si existe.
    pub fn invalidate(&self, key: &K) {
        let mut slots_guard = self.slots.lock().expect("CACHE_LOCK_POISONED");
        slots_guard.pop(key);
    }

    /**
     * Barrido explícito de entradas vencidas (daemons de higiene).
     * Retorna la cantidad purgada. La expiración perezosa de 'get'
     * sigue siendo la vía primaria; este barrido sólo recupera RAM
     * entre accesos.
     */
    pub fn purge_expired(&self) -> usize
    where
        K: Clone,
    {
        let mut slots_guard = self.slots.lock().expect("CACHE_LOCK_POISONED");
        let now = Instant::now();

        let expired_keys: Vec<K> = slots_guard
            .iter()
            .filter(|(_, slot)| slot.expires_at <= now)
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            slots_guard.pop(key);
        }
        expired_keys.len()
    }

    /// Cantidad de entradas residentes (vigentes o aún no purgadas).
    pub fn len(&self) -> usize {
        self.slots.lock().expect("CACHE_LOCK_POISONED").len()
    }

    /// true cuando el caché no aloja entrada alguna.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
