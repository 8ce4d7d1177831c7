use super::types::UploadedFile;

/// Report for uploads that are neither medical reports nor prescriptions:
/// acknowledges the file and explains what the assistant can do with it.
pub fn build_general_report(file: &UploadedFile) -> String {
    format!(
        "📄 **File Analysis Complete**

I've received your file: \"{}\"

**🔍 What I can help you with:**
• Medical report analysis and dietary recommendations
• Health question answers
• Lifestyle and nutrition advice
• Exercise recommendations

**💬 How to get the most from our conversation:**
• Ask specific questions about your health concerns
• Upload medical reports, lab results, or prescriptions
• Request personalized diet plans
• Ask about exercise recommendations

**📋 Example questions you can ask:**
• \"What diet should I follow for diabetes?\"
• \"How can I lower my cholesterol naturally?\"
• \"What exercises are good for weight loss?\"
• \"Can you analyze my blood work results?\"

Feel free to ask me any health-related questions, and I'll provide detailed, personalized recommendations!",
        file.name
    )
}
