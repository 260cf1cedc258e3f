//! WhatsApp contact links and Spanish notification messages.
//!
//! Phone numbers are normalized to the Chilean international format before
//! building a `wa.me` deep link. Message builders return plain text; the
//! caller decides whether to wrap it in a link.

use crate::profile::VetProfile;

/// Normalize a phone number to digits with the Chilean country code.
///
/// "+56 9 7604 0797", "9 7604 0797" and "976040797" all normalize to
/// "56976040797".
pub fn normalize_chilean_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with("56") {
        digits
    } else {
        format!("56{}", digits)
    }
}

/// Build a `wa.me` deep link with the message percent-encoded.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_chilean_phone(phone),
        urlencoding::encode(message)
    )
}

/// Reminder for a scheduled exam, with preparation instructions.
pub fn exam_reminder_message(
    client_name: &str,
    pet_name: &str,
    exam_type: &str,
    exam_date: &str,
    instructions: &str,
    vet: &VetProfile,
) -> String {
    format!(
        "🏥 *RECORDATORIO DE EXAMEN VETERINARIO*\n\n\
         Hola {client_name}! 👋\n\n\
         Te recordamos que {pet_name} tiene programado:\n\
         📋 *{exam_type}*\n\
         📅 *Fecha:* {exam_date}\n\n\
         📝 *INSTRUCCIONES IMPORTANTES:*\n\
         {instructions}\n\n\
         👩‍⚕️ *Veterinaria:* {name}\n\
         📞 *Consultas:* {phone}\n\n\
         Por favor confirma tu asistencia respondiendo este mensaje.\n\n\
         _VetCare Chile - Cuidado veterinario a domicilio_ 🐾",
        name = vet.name,
        phone = vet.phone,
    )
}

/// Confirmation for a home-visit appointment.
pub fn appointment_confirmation_message(
    client_name: &str,
    pet_name: &str,
    service: &str,
    appointment_date: &str,
    appointment_time: &str,
    address: &str,
    vet: &VetProfile,
) -> String {
    format!(
        "✅ *CITA CONFIRMADA - VETCARE CHILE*\n\n\
         Hola {client_name}! \n\n\
         Tu cita veterinaria ha sido confirmada:\n\n\
         🐾 *Paciente:* {pet_name}\n\
         🏥 *Servicio:* {service}\n\
         📅 *Fecha:* {appointment_date}\n\
         🕐 *Hora:* {appointment_time}\n\
         📍 *Dirección:* {address}\n\n\
         👩‍⚕️ *Veterinaria:* {name}\n\
         📞 *Contacto:* {phone}\n\n\
         *IMPORTANTE:*\n\
         - La veterinaria llegará 15 min antes de la hora\n\
         - Ten listo el carnet de vacunas de tu mascota\n\
         - Prepara un espacio cómodo y bien iluminado\n\n\
         ¿Necesitas cambiar la hora? Responde este mensaje.\n\n\
         _VetCare Chile - Tu veterinaria de confianza a domicilio_ 🏠🐾",
        name = vet.name,
        phone = vet.phone,
    )
}

/// Notice that exam results are available in the client portal.
pub fn exam_results_ready_message(
    client_name: &str,
    pet_name: &str,
    exam_type: &str,
    vet: &VetProfile,
) -> String {
    format!(
        "📋 *RESULTADOS LISTOS - VETCARE CHILE*\n\n\
         Hola {client_name}! \n\n\
         Los resultados del examen de {pet_name} ya están disponibles:\n\n\
         🔬 *Examen:* {exam_type}\n\
         🐾 *Paciente:* {pet_name}\n\
         👩‍⚕️ *Veterinaria:* {name}\n\n\
         Los resultados han sido enviados a tu correo electrónico y están \
         disponibles en el portal de clientes.\n\n\
         📞 *Consultas:* {phone}\n\n\
         _VetCare Chile - Resultados profesionales para el cuidado de tu mascota_ 🩺",
        name = vet.name,
        phone = vet.phone,
    )
}

/// Reminder that a vaccine is coming due, with the recommended date.
pub fn vaccination_reminder_message(
    client_name: &str,
    pet_name: &str,
    vaccine_type: &str,
    due_date: &str,
    vet: &VetProfile,
) -> String {
    format!(
        "💉 *RECORDATORIO DE VACUNACIÓN*\n\n\
         Hola {client_name}! \n\n\
         Es hora de vacunar a {pet_name}:\n\n\
         🐾 *Mascota:* {pet_name}\n\
         💉 *Vacuna:* {vaccine_type}\n\
         📅 *Fecha recomendada:* {due_date}\n\
         👩‍⚕️ *Veterinaria:* {name}\n\n\
         Para agendar la vacunación a domicilio, responde este mensaje o \
         llama al {phone}.\n\n\
         *Beneficios del servicio a domicilio:*\n\
         - Sin estrés para tu mascota\n\
         - Comodidad de tu hogar\n\
         - Atención personalizada\n\n\
         _VetCare Chile - Vacunación segura en la comodidad de tu hogar_ 🏠💉",
        name = vet.name,
        phone = vet.phone,
    )
}

/// Acknowledgement of an emergency inquiry with first-response guidance.
pub fn emergency_contact_message(
    client_name: &str,
    pet_name: &str,
    issue: &str,
    vet: &VetProfile,
) -> String {
    format!(
        "🚨 *CONTACTO DE EMERGENCIA - VETCARE*\n\n\
         {client_name}, hemos recibido tu consulta de emergencia.\n\n\
         🐾 *Paciente:* {pet_name}\n\
         ⚠️ *Motivo:* {issue}\n\
         👩‍⚕️ *Veterinaria de guardia:* {name}\n\n\
         📞 *LLAMA INMEDIATAMENTE:* {phone}\n\n\
         Mientras tanto:\n\
         - Mantén a tu mascota calmada\n\
         - No le des comida ni agua\n\
         - Observa síntomas y anótalos\n\n\
         La veterinaria te contactará en los próximos 15 minutos.\n\n\
         _VetCare Chile - Emergencias veterinarias 24/7_ 🏥",
        name = vet.name,
        phone = vet.emergency_phone,
    )
}
