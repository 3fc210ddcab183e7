// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android telephony via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Each trait method calls `SmsManager` through
// JNI on the ART runtime. The JavaVM handle comes from `ndk_context`, which
// the exported entry points in `exports` initialise on first use.
//
// ## Exceptions
//
// A Java exception thrown by `SmsManager` surfaces from `jni` as
// `Error::JavaException`. It is cleared immediately and classified:
// `SecurityException` (missing `SEND_SMS` permission) becomes
// `TransmissionError::PermissionDenied`, everything else `Failed`.

#![cfg(target_os = "android")]

mod exports;

use jni::JNIEnv;
use jni::JavaVM;
use jni::objects::{JObject, JString, JValue};
use jni::sys::jint;

use safeguard_core::TransmissionError;

use crate::traits::*;

const SMS_MANAGER_CLASS: &str = "android/telephony/SmsManager";
const SECURITY_EXCEPTION_CLASS: &str = "java/lang/SecurityException";

/// `sendTextMessage(String dest, String scAddress, String text, PendingIntent sent, PendingIntent delivered)`
const SEND_TEXT_SIG: &str = "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;Landroid/app/PendingIntent;Landroid/app/PendingIntent;)V";

/// `sendMultipartTextMessage(String dest, String scAddress, ArrayList<String> parts, ArrayList<PendingIntent> sent, ArrayList<PendingIntent> delivered)`
const SEND_MULTIPART_SIG: &str = "(Ljava/lang/String;Ljava/lang/String;Ljava/util/ArrayList;Ljava/util/ArrayList;Ljava/util/ArrayList;)V";

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Attach the current thread to the JavaVM and run `f` with its [`JNIEnv`].
///
/// Calls `ndk_context::android_context()` to retrieve the `JavaVM*` pointer
/// registered by `exports::register_host`. A thread that is already attached
/// (the usual case, since calls arrive from the host activity) is reused.
fn with_env<R>(
    f: impl FnOnce(&mut JNIEnv<'_>) -> Result<R, TransmissionError>,
) -> Result<R, TransmissionError> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` registered from a live JNIEnv.
    // The pointer is valid for the lifetime of the process.
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| TransmissionError::Failed(format!("failed to obtain JavaVM: {e}")))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| TransmissionError::Failed(format!("failed to attach JNI thread: {e}")))?;
    f(&mut env)
}

/// Convert a `jni` result, classifying any pending Java exception.
///
/// Takes the result first so call sites can write
/// `jni_try(env.call_method(..), env, "..")` without overlapping borrows.
fn jni_try<T>(
    result: jni::errors::Result<T>,
    env: &mut JNIEnv<'_>,
    context: &str,
) -> Result<T, TransmissionError> {
    result.map_err(|e| classify(env, context, e))
}

fn classify(env: &mut JNIEnv<'_>, context: &str, e: jni::errors::Error) -> TransmissionError {
    if !matches!(e, jni::errors::Error::JavaException) {
        return TransmissionError::Failed(format!("{context}: {e}"));
    }
    match take_exception(env) {
        Some((true, message)) => TransmissionError::PermissionDenied(message),
        Some((false, message)) => TransmissionError::Failed(format!("{context}: {message}")),
        None => TransmissionError::Failed(format!("{context}: {e}")),
    }
}

/// Clear the pending Java exception and describe it.
///
/// Returns `(is_security_exception, throwable.toString())`.
fn take_exception(env: &mut JNIEnv<'_>) -> Option<(bool, String)> {
    let throwable = env.exception_occurred().ok()?;
    if throwable.is_null() {
        return None;
    }
    env.exception_clear().ok()?;

    let is_security = env
        .is_instance_of(&throwable, SECURITY_EXCEPTION_CLASS)
        .unwrap_or(false);

    let description = env
        .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l());
    let message = match description {
        Ok(obj) => env
            .get_string(&JString::from(obj))
            .map(String::from)
            .unwrap_or_else(|_| "unprintable Java exception".into()),
        Err(_) => {
            // toString itself threw; drop that one too.
            let _ = env.exception_clear();
            "unprintable Java exception".into()
        }
    };
    Some((is_security, message))
}

/// `SmsManager.getDefault()`.
///
/// Deprecated since API 31 in favour of `Context.getSystemService`, but still
/// returns the default-subscription manager on every release.
fn sms_manager<'local>(env: &mut JNIEnv<'local>) -> Result<JObject<'local>, TransmissionError> {
    jni_try(
        env.call_static_method(
            SMS_MANAGER_CLASS,
            "getDefault",
            "()Landroid/telephony/SmsManager;",
            &[],
        )
        .and_then(|v| v.l()),
        env,
        "SmsManager.getDefault",
    )
}

// ---------------------------------------------------------------------------
// Telephony implementation
// ---------------------------------------------------------------------------

/// Android implementation of the telephony traits.
///
/// Zero-sized; the `SmsManager` handle is acquired per call and all state
/// lives on the Java side.
pub struct AndroidTelephony;

impl AndroidTelephony {
    /// Create a new Android telephony handle.
    ///
    /// This does **not** touch JNI; the first JNI call happens lazily when a
    /// trait method is invoked.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidTelephony {
    fn default() -> Self {
        Self::new()
    }
}

impl Telephony for AndroidTelephony {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

impl MessageSplitter for AndroidTelephony {
    /// `SmsManager.divideMessage(text)`, copied out of the returned
    /// `ArrayList<String>` in order.
    fn divide_message(&self, message: &str) -> Result<Vec<String>, TransmissionError> {
        with_env(|env| {
            let manager = sms_manager(env)?;
            let j_message = jni_try(env.new_string(message), env, "new_string(message)")?;

            let list = jni_try(
                env.call_method(
                    &manager,
                    "divideMessage",
                    "(Ljava/lang/String;)Ljava/util/ArrayList;",
                    &[JValue::Object(&j_message)],
                )
                .and_then(|v| v.l()),
                env,
                "SmsManager.divideMessage",
            )?;

            let size = jni_try(
                env.call_method(&list, "size", "()I", &[]).and_then(|v| v.i()),
                env,
                "ArrayList.size",
            )?;

            let mut parts = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
            for index in 0..size {
                let item = jni_try(
                    env.call_method(&list, "get", "(I)Ljava/lang/Object;", &[JValue::Int(index)])
                        .and_then(|v| v.l()),
                    env,
                    "ArrayList.get",
                )?;
                let item = JString::from(item);
                let part = jni_try(env.get_string(&item).map(String::from), env, "get_string(part)")?;
                let _ = env.delete_local_ref(item);
                parts.push(part);
            }

            tracing::debug!(parts = parts.len(), "Android: divideMessage");
            Ok(parts)
        })
    }
}

impl TextSender for AndroidTelephony {
    /// `SmsManager.sendTextMessage(phone, null, text, null, null)`.
    ///
    /// No sent/delivery `PendingIntent`s are registered, so the call returns
    /// as soon as the platform has queued the message.
    fn send_text(&self, phone: &str, text: &str) -> Result<(), TransmissionError> {
        with_env(|env| {
            let manager = sms_manager(env)?;
            let j_phone = jni_try(env.new_string(phone), env, "new_string(phone)")?;
            let j_text = jni_try(env.new_string(text), env, "new_string(text)")?;
            let null = JObject::null();

            jni_try(
                env.call_method(
                    &manager,
                    "sendTextMessage",
                    SEND_TEXT_SIG,
                    &[
                        JValue::Object(&j_phone),
                        JValue::Object(&null), // default service centre
                        JValue::Object(&j_text),
                        JValue::Object(&null),
                        JValue::Object(&null),
                    ],
                ),
                env,
                "SmsManager.sendTextMessage",
            )?;
            Ok(())
        })
    }

    /// `SmsManager.sendMultipartTextMessage(phone, null, parts, null, null)`.
    ///
    /// The parts are copied into a fresh `ArrayList` in slice order; the
    /// receiving handset reassembles them in that order.
    fn send_multipart_text(&self, phone: &str, parts: &[String]) -> Result<(), TransmissionError> {
        with_env(|env| {
            let manager = sms_manager(env)?;
            let j_phone = jni_try(env.new_string(phone), env, "new_string(phone)")?;

            let capacity = jint::try_from(parts.len()).unwrap_or(jint::MAX);
            let list = jni_try(
                env.new_object("java/util/ArrayList", "(I)V", &[JValue::Int(capacity)]),
                env,
                "new ArrayList",
            )?;
            for part in parts {
                let j_part = jni_try(env.new_string(part), env, "new_string(part)")?;
                jni_try(
                    env.call_method(
                        &list,
                        "add",
                        "(Ljava/lang/Object;)Z",
                        &[JValue::Object(&j_part)],
                    ),
                    env,
                    "ArrayList.add",
                )?;
                let _ = env.delete_local_ref(j_part);
            }

            let null = JObject::null();
            jni_try(
                env.call_method(
                    &manager,
                    "sendMultipartTextMessage",
                    SEND_MULTIPART_SIG,
                    &[
                        JValue::Object(&j_phone),
                        JValue::Object(&null),
                        JValue::Object(&list),
                        JValue::Object(&null),
                        JValue::Object(&null),
                    ],
                ),
                env,
                "SmsManager.sendMultipartTextMessage",
            )?;
            Ok(())
        })
    }
}
