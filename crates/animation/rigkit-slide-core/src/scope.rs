//! Scope resolution: which objects' timelines a gesture considers.

use crate::config::{Config, Scope};
use crate::host::AnimationHost;
use crate::ids::ObjectId;

/// Resolve the animated objects in scope, in host order.
///
/// Unanimated objects are skipped silently (logged when `cfg.debug`). An empty
/// result means the tool is unavailable.
pub fn resolve<H: AnimationHost + ?Sized>(cfg: &Config, host: &H) -> Vec<ObjectId> {
    let candidates = match cfg.scope {
        Scope::Active => match host.active_object() {
            Some(obj) => vec![obj],
            None => {
                if cfg.debug {
                    log::debug!("slide keyframes: no active object");
                }
                return Vec::new();
            }
        },
        Scope::Selected => host.selected_objects(),
        Scope::All => host.objects(),
    };

    if candidates.is_empty() && cfg.debug {
        log::debug!("slide keyframes: no object in scope '{}'", cfg.scope);
    }

    candidates
        .into_iter()
        .filter(|&obj| {
            let animated = host.has_animation(obj);
            if !animated && cfg.debug {
                log::debug!(
                    "slide keyframes: object {} neglected, no keyframes found",
                    display_name(host, obj)
                );
            }
            animated
        })
        .collect()
}

pub(crate) fn display_name<H: AnimationHost + ?Sized>(host: &H, obj: ObjectId) -> String {
    host.object_name(obj).unwrap_or_else(|| obj.to_string())
}
